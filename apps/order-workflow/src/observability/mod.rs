//! Logging initialisation.
//!
//! Console logging via `tracing` with an environment-driven filter.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directives; when unset the configured default
//!   level applies.
//!
//! # Usage
//!
//! ```ignore
//! use order_workflow::config::LoggingConfig;
//! use order_workflow::observability::init_logging;
//!
//! init_logging(&LoggingConfig::default())?;
//!
//! #[tracing::instrument]
//! fn advance_order() {
//!     tracing::info!("Advancing order");
//! }
//! ```

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

/// Error type for logging initialisation.
#[derive(Debug, Error)]
pub enum ObservabilityError {
    /// Failed to initialise the tracing subscriber.
    #[error("failed to initialise tracing subscriber: {0}")]
    SubscriberError(String),
}

/// Initialise the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured default level. Call once
/// at process start.
///
/// # Errors
///
/// Returns error if a subscriber is already installed or the configured
/// level is not a valid filter directive.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| ObservabilityError::SubscriberError(e.to_string()))?,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ObservabilityError::SubscriberError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_logging_succeeds_once() {
        let result = init_logging(&LoggingConfig::default());
        // First call wins; a second install attempt reports the error.
        if result.is_ok() {
            assert!(init_logging(&LoggingConfig::default()).is_err());
        }
    }

    #[test]
    fn invalid_level_is_rejected() {
        let config = LoggingConfig {
            level: "not a directive!!".to_string(),
        };
        // Only meaningful when RUST_LOG is unset; either way it must not panic.
        let _ = init_logging(&config);
    }
}
