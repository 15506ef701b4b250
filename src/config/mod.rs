//! Persistent settings: where data lives and how large the expense store may grow.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use dirs::home_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    storage::records::{StoreLimits, DEFAULT_MAX_ENTRIES, DEFAULT_MAX_PAYLOAD_BYTES},
    utils::persistence::write_atomic,
};

const HOME_ENV_VAR: &str = "EXPENSE_CORE_HOME";
const DEFAULT_DIR_NAME: &str = ".expense_core";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const DATA_DIR: &str = "data";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),
}

/// Returns the application data directory, defaulting to `~/.expense_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV_VAR) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// User-adjustable settings for the expense stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Directory for the JSON record files. Defaults to `<app data>/data`.
    pub data_dir: Option<PathBuf>,
    #[serde(default = "Config::default_max_expense_entries")]
    pub max_expense_entries: usize,
    #[serde(default = "Config::default_max_payload_bytes")]
    pub max_payload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            max_expense_entries: Self::default_max_expense_entries(),
            max_payload_bytes: Self::default_max_payload_bytes(),
        }
    }
}

impl Config {
    pub fn default_max_expense_entries() -> usize {
        DEFAULT_MAX_ENTRIES
    }

    pub fn default_max_payload_bytes() -> usize {
        DEFAULT_MAX_PAYLOAD_BYTES
    }

    pub fn resolve_data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(path) => path.clone(),
            None => app_data_dir().join(DATA_DIR),
        }
    }

    pub fn limits(&self) -> StoreLimits {
        StoreLimits {
            max_entries: self.max_expense_entries,
            max_payload_bytes: self.max_payload_bytes,
        }
    }
}

/// Loads and saves [`Config`] as `<base>/config/config.json`.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        let config_dir = base.join(CONFIG_DIR);
        fs::create_dir_all(&config_dir)?;
        Ok(Self {
            config_path: config_dir.join(CONFIG_FILE),
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the stored configuration, falling back to defaults when none exists.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data = fs::read_to_string(&self.config_path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        write_atomic(&self.config_path, &json)?;
        Ok(())
    }
}
