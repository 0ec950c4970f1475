//! Configuration management for cliniclog.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::store::DEFAULT_CAPACITY;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "cliniclog";

/// Largest table a session may be configured with.
pub const MAX_CAPACITY: usize = 10_000;

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `CLINICLOG_`, sections split on `__`)
/// 2. TOML config file at `~/.config/cliniclog/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Record store configuration.
    pub store: StoreConfig,
    /// Clinic identity shown in the banner.
    pub clinic: ClinicConfig,
}

/// Record store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Number of record slots. Fixed for the whole session.
    pub capacity: usize,
}

/// Clinic identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicConfig {
    /// Clinic name, first banner line.
    pub name: String,
    /// Campus, second banner line.
    pub campus: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            name: "Batangas State University Clinic".to_string(),
            campus: "Alangilan Campus".to_string(),
        }
    }
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("CLINICLOG_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.store.capacity == 0 {
            return Err(Error::ConfigValidation {
                message: "store.capacity must be greater than 0".to_string(),
            });
        }

        if self.store.capacity > MAX_CAPACITY {
            return Err(Error::ConfigValidation {
                message: format!(
                    "store.capacity ({}) cannot be greater than {MAX_CAPACITY}",
                    self.store.capacity
                ),
            });
        }

        if self.clinic.name.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "clinic.name must not be blank".to_string(),
            });
        }

        if self.clinic.campus.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "clinic.campus must not be blank".to_string(),
            });
        }

        Ok(())
    }
}
