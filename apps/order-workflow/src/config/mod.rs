//! Configuration module for the order workflow core.
//!
//! Provides configuration loading and validation for the workflow
//! components. The process constructs one [`Config`] at start and passes
//! the relevant sections to each component; there is no process-wide
//! lazily-initialised configuration handle.
//!
//! # Usage
//!
//! ```rust,ignore
//! use order_workflow::config::{Config, load_config};
//!
//! // Defaults, no file required
//! let config = load_config(None)?;
//!
//! // Load from a YAML file
//! let config = load_config(Some("config.yaml"))?;
//!
//! println!("store timeout: {:?}", config.store.operation_timeout());
//! ```

mod dashboard;
mod observability;
mod persistence;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use dashboard::DashboardConfig;
pub use observability::LoggingConfig;
pub use persistence::StoreConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Store round-trip configuration.
    #[serde(default)]
    pub store: StoreConfig,
    /// Dashboard configuration.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Validate the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns error when a value would disable a required behaviour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.operation_timeout_ms == 0 {
            return Err(ConfigError::ValidationError(
                "store.operation_timeout_ms must be greater than 0".to_string(),
            ));
        }

        if self.dashboard.recent_window == 0 {
            return Err(ConfigError::ValidationError(
                "dashboard.recent_window must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Load and validate configuration.
///
/// With no path, returns the validated defaults; with a path, reads and
/// parses the YAML file at that location.
///
/// # Errors
///
/// Returns error if the file cannot be read, parsed or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let config = match path {
        None => Config::default(),
        Some(path) => {
            let content =
                std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
                    path: path.to_string(),
                    source,
                })?;
            serde_yaml_bw::from_str(&content)?
        }
    };

    config.validate()?;
    Ok(config)
}
