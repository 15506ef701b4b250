use thiserror::Error;
use uuid::Uuid;

/// Failures raised by the key-value backends and the record stores built on them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Maximum number of entries ({limit}) exceeded: {count} records")]
    QuotaExceeded { count: usize, limit: usize },
    #[error("Storage limit exceeded: payload is {bytes} bytes, limit is {limit} bytes")]
    PayloadTooLarge { bytes: usize, limit: usize },
    #[error("Storage unavailable: {0}")]
    StoreUnavailable(String),
    #[error("Stored payload under `{key}` is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Write failed ({cause}) and restoring templates also failed ({rollback})")]
    RollbackFailed {
        cause: Box<StoreError>,
        rollback: Box<StoreError>,
    },
}

impl StoreError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        StoreError::StoreUnavailable(reason.into())
    }
}

/// Rejections produced when a record breaks one of its field invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Amount must be a positive number, got {0}")]
    NonPositiveAmount(f64),
    #[error("End date {end} precedes start date {start}")]
    EndBeforeStart {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },
    #[error("Last processed date {cursor} precedes start date {start}")]
    CursorBeforeStart {
        start: chrono::NaiveDate,
        cursor: chrono::NaiveDate,
    },
    #[error("Warning threshold must be between 0 and 100 percent, got {0}")]
    ThresholdOutOfRange(f64),
}

/// Error type returned by the CRUD services.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("Recurring expense not found: {0}")]
    TemplateNotFound(Uuid),
    #[error("Expense not found: {0}")]
    ExpenseNotFound(Uuid),
    #[error("Budget not found: {0}")]
    BudgetNotFound(Uuid),
}
