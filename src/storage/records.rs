//! Typed record stores persisting JSON arrays under fixed keys.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    domain::{Budget, Expense, RecurringTemplate},
    errors::StoreError,
};

use super::{KeyValueStore, RecordStore, Result, BUDGETS_KEY, EXPENSES_KEY, TEMPLATES_KEY};

/// Default ceiling on the number of stored expenses.
pub const DEFAULT_MAX_ENTRIES: usize = 1000;
/// Default ceiling on the serialized expense payload (5 MiB).
pub const DEFAULT_MAX_PAYLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Ceilings enforced by [`ExpenseStore`] on every save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreLimits {
    pub max_entries: usize,
    pub max_payload_bytes: usize,
}

impl Default for StoreLimits {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
        }
    }
}

/// A serialized expense list that already passed the store limits.
#[derive(Debug, Clone)]
pub struct EncodedRecords {
    payload: String,
    count: usize,
}

impl EncodedRecords {
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn len_bytes(&self) -> usize {
        self.payload.len()
    }
}

/// Recurring templates stored under [`TEMPLATES_KEY`].
#[derive(Debug, Clone)]
pub struct TemplateStore<S> {
    backend: S,
}

impl<S: KeyValueStore> TemplateStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }
}

impl<S: KeyValueStore> RecordStore for TemplateStore<S> {
    type Record = RecurringTemplate;

    fn load_all(&self) -> Result<Vec<RecurringTemplate>> {
        load_records(&self.backend, TEMPLATES_KEY)
    }

    fn save_all(&self, records: &[RecurringTemplate]) -> Result<()> {
        let payload = serde_json::to_string(records)?;
        self.backend.set(TEMPLATES_KEY, &payload)?;
        debug!(count = records.len(), "saved recurring templates");
        Ok(())
    }
}

/// Expenses stored under [`EXPENSES_KEY`], bounded by [`StoreLimits`].
#[derive(Debug, Clone)]
pub struct ExpenseStore<S> {
    backend: S,
    limits: StoreLimits,
}

impl<S: KeyValueStore> ExpenseStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_limits(backend, StoreLimits::default())
    }

    pub fn with_limits(backend: S, limits: StoreLimits) -> Self {
        Self { backend, limits }
    }

    pub fn limits(&self) -> StoreLimits {
        self.limits
    }

    /// Serializes `records` and checks them against the limits without writing.
    pub fn encode(&self, records: &[Expense]) -> Result<EncodedRecords> {
        if records.len() > self.limits.max_entries {
            return Err(StoreError::QuotaExceeded {
                count: records.len(),
                limit: self.limits.max_entries,
            });
        }
        let payload = serde_json::to_string(records)?;
        if payload.len() > self.limits.max_payload_bytes {
            return Err(StoreError::PayloadTooLarge {
                bytes: payload.len(),
                limit: self.limits.max_payload_bytes,
            });
        }
        Ok(EncodedRecords {
            payload,
            count: records.len(),
        })
    }

    /// Writes a payload produced by [`ExpenseStore::encode`].
    pub fn write_encoded(&self, encoded: &EncodedRecords) -> Result<()> {
        self.backend.set(EXPENSES_KEY, &encoded.payload)?;
        debug!(
            count = encoded.count,
            bytes = encoded.len_bytes(),
            "saved expenses"
        );
        Ok(())
    }
}

impl<S: KeyValueStore> RecordStore for ExpenseStore<S> {
    type Record = Expense;

    fn load_all(&self) -> Result<Vec<Expense>> {
        load_records(&self.backend, EXPENSES_KEY)
    }

    fn save_all(&self, records: &[Expense]) -> Result<()> {
        let encoded = self.encode(records)?;
        self.write_encoded(&encoded)
    }
}

/// Budgets stored under [`BUDGETS_KEY`].
#[derive(Debug, Clone)]
pub struct BudgetStore<S> {
    backend: S,
}

impl<S: KeyValueStore> BudgetStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }
}

impl<S: KeyValueStore> RecordStore for BudgetStore<S> {
    type Record = Budget;

    fn load_all(&self) -> Result<Vec<Budget>> {
        load_records(&self.backend, BUDGETS_KEY)
    }

    fn save_all(&self, records: &[Budget]) -> Result<()> {
        let payload = serde_json::to_string(records)?;
        self.backend.set(BUDGETS_KEY, &payload)
    }
}

fn load_records<R: DeserializeOwned>(backend: &impl KeyValueStore, key: &str) -> Result<Vec<R>> {
    let raw = match backend.get(key)? {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(Vec::new()),
    };
    serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
        key: key.to_string(),
        source,
    })
}
