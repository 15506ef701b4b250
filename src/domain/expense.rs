use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    category::{ExpenseCategory, PaymentMethod},
    common::Identifiable,
    template::RecurringTemplate,
};
use crate::errors::ValidationError;

/// A single dated expense, entered by hand or materialized from a template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub description: String,
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_deductible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Expense {
    pub fn new(
        date: NaiveDate,
        amount: f64,
        category: ExpenseCategory,
        payment_method: PaymentMethod,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
            category,
            description: description.into(),
            payment_method,
            receipt_url: None,
            is_recurring: false,
            recurring_id: None,
            tax_deductible: None,
            notes: None,
            tags: Vec::new(),
        }
    }

    /// Builds the occurrence of `template` due on `date`. Field values are
    /// copied, so later template edits leave this expense untouched.
    pub fn from_template(template: &RecurringTemplate, id: Uuid, date: NaiveDate) -> Self {
        Self {
            id,
            date,
            amount: template.amount,
            category: template.category,
            description: template.description.clone(),
            payment_method: template.payment_method,
            receipt_url: None,
            is_recurring: true,
            recurring_id: Some(template.id),
            tax_deductible: None,
            notes: None,
            tags: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.amount.is_finite() && self.amount > 0.0) {
            return Err(ValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}
