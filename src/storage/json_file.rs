use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{config::Config, errors::StoreError, utils::persistence::write_atomic};

use super::{KeyValueStore, Result};

const FILE_EXTENSION: &str = "json";

/// Filesystem-backed key-value store keeping one JSON file per key.
///
/// Writes are staged to `<key>.json.tmp` and renamed over the target, so a
/// failed write never leaves a half-written value behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|err| io_unavailable(&dir, err))?;
        Ok(Self { dir })
    }

    /// Opens the store in the data directory named by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.resolve_data_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{}", canonical_key(key), FILE_EXTENSION))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_unavailable(&path, err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        write_atomic(&path, value).map_err(|err| io_unavailable(&path, err))?;
        debug!(key, bytes = value.len(), path = %path.display(), "stored value");
        Ok(())
    }
}

fn canonical_key(key: &str) -> String {
    let sanitized: String = key
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "store".into()
    } else {
        sanitized
    }
}

fn io_unavailable(path: &Path, err: io::Error) -> StoreError {
    StoreError::unavailable(format!("{}: {}", path.display(), err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::persistence::tmp_path;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonFileStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonFileStore::new(temp.path().join("data")).expect("json file store");
        (store, temp)
    }

    #[test]
    fn keys_map_to_sanitized_file_names() {
        let (store, _guard) = store_with_temp_dir();
        assert!(store
            .path_for("recurring_expenses")
            .ends_with("recurring_expenses.json"));
        assert!(store.path_for("Weird Key!").ends_with("weird_key_.json"));
        assert!(store.path_for("???").ends_with("store.json"));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let (store, _guard) = store_with_temp_dir();
        assert_eq!(store.get("expenses").unwrap(), None);
        store.set("expenses", "[]").unwrap();
        assert_eq!(store.get("expenses").unwrap().as_deref(), Some("[]"));
        assert!(!tmp_path(&store.path_for("expenses")).exists());
    }

    #[test]
    fn failed_write_preserves_original_file() {
        let (store, _guard) = store_with_temp_dir();
        store.set("expenses", "[\"original\"]").unwrap();

        // A directory squatting on the staging path makes File::create fail.
        fs::create_dir_all(tmp_path(&store.path_for("expenses"))).unwrap();

        let result = store.set("expenses", "[\"replacement\"]");
        assert!(matches!(result, Err(StoreError::StoreUnavailable(_))));
        assert_eq!(
            store.get("expenses").unwrap().as_deref(),
            Some("[\"original\"]")
        );
    }
}
