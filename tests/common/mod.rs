#![allow(dead_code)]

use std::sync::Mutex;

use chrono::NaiveDate;
use expense_core::{
    domain::{ExpenseCategory, Frequency, PaymentMethod, RecurringTemplate},
    storage::JsonFileStore,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a file-backed store in a fresh temporary directory.
pub fn file_store() -> JsonFileStore {
    let temp = TempDir::new().expect("create temp dir");
    let dir = temp.path().join("data");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    JsonFileStore::new(dir).expect("create json file store")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn template(frequency: Frequency, start: NaiveDate) -> RecurringTemplate {
    RecurringTemplate::new(
        250.0,
        ExpenseCategory::Utilities,
        PaymentMethod::BankTransfer,
        "Co-working desk",
        frequency,
        start,
    )
}
