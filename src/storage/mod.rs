//! Persistence boundary: a string key-value store and the record stores layered on it.

pub mod json_file;
pub mod memory;
pub mod records;

use std::sync::Arc;

use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Key under which recurring templates are stored.
pub const TEMPLATES_KEY: &str = "recurring_expenses";
/// Key under which expenses are stored.
pub const EXPENSES_KEY: &str = "expenses";
/// Key under which budgets are stored.
pub const BUDGETS_KEY: &str = "budgets";

/// Durable string storage addressed by key.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// An ordered collection of records persisted as one unit.
///
/// `save_all` overwrites everything previously stored; there are no
/// incremental updates.
pub trait RecordStore {
    type Record;

    fn load_all(&self) -> Result<Vec<Self::Record>>;
    fn save_all(&self, records: &[Self::Record]) -> Result<()>;
}

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use records::{BudgetStore, EncodedRecords, ExpenseStore, StoreLimits, TemplateStore};
