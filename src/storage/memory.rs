use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Mutex, MutexGuard,
    },
};

use crate::errors::StoreError;

use super::{KeyValueStore, Result};

/// Process-local key-value store.
///
/// Besides plain storage it can simulate an unavailable environment, either
/// entirely (`set_disabled`) or for writes to particular keys
/// (`fail_writes_to`), and it counts successful writes.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    failing_keys: Mutex<HashSet<String>>,
    disabled: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.store(disabled, Ordering::SeqCst);
    }

    /// Makes every later write to `key` fail with `StoreUnavailable`.
    pub fn fail_writes_to(&self, key: &str) -> Result<()> {
        lock(&self.failing_keys)?.insert(key.to_string());
        Ok(())
    }

    pub fn clear_failures(&self) -> Result<()> {
        lock(&self.failing_keys)?.clear();
        Ok(())
    }

    /// Number of writes that reached the store.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn ensure_enabled(&self) -> Result<()> {
        if self.disabled.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("storage is disabled"));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.ensure_enabled()?;
        Ok(lock(&self.entries)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_enabled()?;
        if lock(&self.failing_keys)?.contains(key) {
            return Err(StoreError::unavailable(format!("writes to `{key}` are rejected")));
        }
        lock(&self.entries)?.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| StoreError::unavailable("storage lock poisoned"))
}
