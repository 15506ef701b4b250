//! Enumerations shared by expenses, templates and budgets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Spending category attached to every expense.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    #[serde(rename = "Office Supplies")]
    OfficeSupplies,
    Travel,
    Meals,
    Utilities,
    Miscellaneous,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 5] = [
        ExpenseCategory::OfficeSupplies,
        ExpenseCategory::Travel,
        ExpenseCategory::Meals,
        ExpenseCategory::Utilities,
        ExpenseCategory::Miscellaneous,
    ];
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseCategory::OfficeSupplies => "Office Supplies",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Meals => "Meals",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Miscellaneous => "Miscellaneous",
        };
        f.write_str(label)
    }
}

/// How an expense was paid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    Cash,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    Other,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Other => "Other",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_labels_match_display_labels() {
        for category in ExpenseCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
        let method: PaymentMethod = serde_json::from_str("\"Bank Transfer\"").unwrap();
        assert_eq!(method, PaymentMethod::BankTransfer);
    }
}
