//! Configuration for twin hosts.
//!
//! Lives at `.twin/config.json`. Every field has a default, so an empty
//! object or a missing file yields a usable config.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::store::DEFAULT_STORAGE_KEY;
use crate::theme::Appearance;

/// Lowest tick rate the TUI polls at. Zero would busy-loop the poll thread.
pub const MIN_TICK_RATE_MS: u64 = 10;

/// Main configuration for twin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Key the theme preference is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Preference file, relative to the data directory.
    #[serde(default = "default_storage_file")]
    pub storage_file: String,

    /// Forces the system appearance instead of detecting it.
    #[serde(default)]
    pub system_appearance: Option<Appearance>,

    /// TUI tick rate in milliseconds. Values below [`MIN_TICK_RATE_MS`]
    /// are raised to it.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Log file used while the TUI owns the terminal, relative to the data directory.
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.into()
}

fn default_storage_file() -> String {
    "preferences.json".into()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_file() -> String {
    "twin.log".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            storage_file: default_storage_file(),
            system_appearance: None,
            tick_rate_ms: default_tick_rate_ms(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let mut config: Self = serde_json::from_str(&content).map_err(ConfigError::Parse)?;
        if config.tick_rate_ms < MIN_TICK_RATE_MS {
            warn!(
                tick_rate_ms = config.tick_rate_ms,
                min = MIN_TICK_RATE_MS,
                "Tick rate too low, using minimum"
            );
            config.tick_rate_ms = MIN_TICK_RATE_MS;
        }
        Ok(config)
    }

    /// Load configuration, returning defaults if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Tick rate to poll at, never below [`MIN_TICK_RATE_MS`].
    pub fn tick_rate_ms(&self) -> u64 {
        self.tick_rate_ms.max(MIN_TICK_RATE_MS)
    }

    /// Absolute path of the preference file inside `data_dir`.
    pub fn storage_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.storage_file)
    }

    /// Absolute path of the log file inside `data_dir`.
    pub fn log_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.log_file)
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
