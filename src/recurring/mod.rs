//! Recurring expense processing: due-date generation and materialization.

pub mod engine;
pub mod occurrences;

pub use engine::{plan_due, MaterializeSummary, Materializer};
pub use occurrences::{occurrences, Occurrences};
