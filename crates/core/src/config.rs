//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into the store. Request
//! handling never reads process-wide environment variables.

use crate::constants::DEFAULT_RECORD_DATA_DIR;
use crate::repositories::collection::Collection;
use crate::ConfigError;
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    record_data_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidInput`] if the path is empty or points at an existing
    /// non-directory.
    pub fn new(record_data_dir: PathBuf) -> Result<Self, ConfigError> {
        if record_data_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidInput(
                "record data directory cannot be empty".into(),
            ));
        }
        if record_data_dir.exists() && !record_data_dir.is_dir() {
            return Err(ConfigError::InvalidInput(format!(
                "record data path is not a directory: {}",
                record_data_dir.display()
            )));
        }

        Ok(Self { record_data_dir })
    }

    /// Builds a config from an optional raw value (typically an environment variable), falling
    /// back to [`DEFAULT_RECORD_DATA_DIR`] when it is absent or blank.
    pub fn from_env_value(value: Option<String>) -> Result<Self, ConfigError> {
        let dir = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_RECORD_DATA_DIR.to_string());
        Self::new(PathBuf::from(dir))
    }

    pub fn record_data_dir(&self) -> &Path {
        &self.record_data_dir
    }

    /// Directory holding every record of `collection`.
    pub fn collection_dir(&self, collection: Collection) -> PathBuf {
        self.record_data_dir.join(collection.dir_name())
    }

    /// Creates the data directory if it does not exist yet.
    pub fn ensure_data_dir(&self) -> Result<(), ConfigError> {
        std::fs::create_dir_all(&self.record_data_dir).map_err(|source| {
            ConfigError::DataDirCreation {
                path: self.record_data_dir.clone(),
                source,
            }
        })
    }
}
