use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{category::ExpenseCategory, common::Identifiable};
use crate::errors::ValidationError;

/// A spending guardrail for a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: Uuid,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub period: BudgetPeriod,
    #[serde(default)]
    pub notifications: bool,
    /// Percentage of the budget at which spending is reported as "near".
    #[serde(rename = "warningThreshold")]
    pub warning_threshold: f64,
}

impl Budget {
    pub fn new(category: ExpenseCategory, amount: f64, period: BudgetPeriod) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            amount,
            period,
            notifications: true,
            warning_threshold: 80.0,
        }
    }

    pub fn with_warning_threshold(mut self, threshold: f64) -> Self {
        self.warning_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.amount.is_finite() && self.amount > 0.0) {
            return Err(ValidationError::NonPositiveAmount(self.amount));
        }
        if !(0.0..=100.0).contains(&self.warning_threshold) {
            return Err(ValidationError::ThresholdOutOfRange(self.warning_threshold));
        }
        Ok(())
    }
}

impl Identifiable for Budget {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BudgetPeriod {
    Monthly,
    Yearly,
}
