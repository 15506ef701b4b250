#![doc(test(attr(deny(warnings))))]

//! Expense Core records one-off and recurring expenses, keeps them in a small
//! key-value store, and materializes recurring expenses as they come due.
//!
//! ```
//! use chrono::NaiveDate;
//! use expense_core::{
//!     domain::{ExpenseCategory, Frequency, PaymentMethod, RecurringTemplate},
//!     ids::UuidGenerator,
//!     recurring::Materializer,
//!     storage::{MemoryStore, RecordStore, TemplateStore},
//!     time::FixedClock,
//! };
//!
//! let backend = MemoryStore::new();
//! let rent = RecurringTemplate::new(
//!     1200.0,
//!     ExpenseCategory::Utilities,
//!     PaymentMethod::BankTransfer,
//!     "Office rent",
//!     Frequency::Monthly,
//!     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
//! );
//! TemplateStore::new(&backend).save_all(&[rent]).unwrap();
//!
//! let today = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
//! let engine = Materializer::new(&backend, FixedClock::on(today), UuidGenerator);
//! let created = engine.materialize_due_now().unwrap();
//! assert_eq!(created.len(), 3);
//! assert!(engine.materialize_due_now().unwrap().is_empty());
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod ids;
pub mod money;
pub mod recurring;
pub mod reports;
pub mod services;
pub mod storage;
pub mod time;
pub mod utils;

use std::sync::Once;

pub use errors::{ServiceError, StoreError, ValidationError};
pub use recurring::{occurrences, Materializer};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}
