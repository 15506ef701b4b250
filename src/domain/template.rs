//! Recurring expense definitions and their processing cursor.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    category::{ExpenseCategory, PaymentMethod},
    common::{Displayable, Identifiable},
    frequency::Frequency,
};
use crate::errors::ValidationError;

/// A recurring expense from which dated expenses are materialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurringTemplate {
    pub id: Uuid,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub description: String,
    pub payment_method: PaymentMethod,
    pub frequency: Frequency,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Date of the most recent occurrence already turned into an expense.
    #[serde(
        rename = "lastProcessed",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_processed: Option<NaiveDate>,
}

impl RecurringTemplate {
    pub fn new(
        amount: f64,
        category: ExpenseCategory,
        payment_method: PaymentMethod,
        description: impl Into<String>,
        frequency: Frequency,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            category,
            description: description.into(),
            payment_method,
            frequency,
            start_date,
            end_date: None,
            last_processed: None,
        }
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_last_processed(mut self, last_processed: NaiveDate) -> Self {
        self.last_processed = Some(last_processed);
        self
    }

    /// Position the next occurrence is measured from. Falls back to the start
    /// date, which is itself never materialized.
    pub fn cursor(&self) -> NaiveDate {
        self.last_processed.unwrap_or(self.start_date)
    }

    /// Returns `true` when the template stopped recurring before `as_of`.
    pub fn has_ended(&self, as_of: NaiveDate) -> bool {
        self.end_date.map_or(false, |end| end < as_of)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.amount.is_finite() && self.amount > 0.0) {
            return Err(ValidationError::NonPositiveAmount(self.amount));
        }
        if let Some(end) = self.end_date {
            if end < self.start_date {
                return Err(ValidationError::EndBeforeStart {
                    start: self.start_date,
                    end,
                });
            }
        }
        if let Some(cursor) = self.last_processed {
            if cursor < self.start_date {
                return Err(ValidationError::CursorBeforeStart {
                    start: self.start_date,
                    cursor,
                });
            }
        }
        Ok(())
    }
}

impl Identifiable for RecurringTemplate {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for RecurringTemplate {
    fn display_label(&self) -> String {
        format!("{} ({}, {})", self.description, self.category, self.frequency)
    }
}
