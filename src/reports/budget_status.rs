use chrono::NaiveDate;

use crate::{
    domain::{Budget, BudgetPeriod, Expense, ExpenseCategory},
    money::format_currency,
};

use super::month_key;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpendingLevel {
    Under,
    Near,
    Over,
}

/// Spending against one monthly budget.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub category: ExpenseCategory,
    pub spent: f64,
    pub budget: f64,
    pub percentage: f64,
    pub remaining: f64,
    pub level: SpendingLevel,
}

/// Compares each monthly budget with the spending in its category during the
/// calendar month containing `reference`. Yearly budgets are not reported.
pub fn calculate_budget_status(
    budgets: &[Budget],
    expenses: &[Expense],
    reference: NaiveDate,
) -> Vec<BudgetStatus> {
    let month = month_key(reference);
    budgets
        .iter()
        .filter(|budget| budget.period == BudgetPeriod::Monthly)
        .map(|budget| {
            let spent: f64 = expenses
                .iter()
                .filter(|e| e.category == budget.category && month_key(e.date) == month)
                .map(|e| e.amount)
                .sum();
            let percentage = if budget.amount > 0.0 {
                spent / budget.amount * 100.0
            } else if spent > 0.0 {
                f64::INFINITY
            } else {
                0.0
            };
            let level = if percentage >= 100.0 {
                SpendingLevel::Over
            } else if percentage >= budget.warning_threshold {
                SpendingLevel::Near
            } else {
                SpendingLevel::Under
            };
            BudgetStatus {
                category: budget.category,
                spent,
                budget: budget.amount,
                percentage,
                remaining: budget.amount - spent,
                level,
            }
        })
        .collect()
}

/// One message per budget that is over or close to its limit.
pub fn budget_warnings(statuses: &[BudgetStatus]) -> Vec<String> {
    statuses
        .iter()
        .filter_map(|status| match status.level {
            SpendingLevel::Under => None,
            SpendingLevel::Over => Some(format!(
                "You've exceeded your {} budget by {}",
                status.category,
                format_currency(status.remaining.abs())
            )),
            SpendingLevel::Near => Some(format!(
                "You're approaching your {} budget ({:.1}% used)",
                status.category, status.percentage
            )),
        })
        .collect()
}
