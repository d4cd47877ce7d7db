//! Store configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for store round-trips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Upper bound for a single store operation, in milliseconds.
    /// An elapsed timeout surfaces to callers as a retryable failure.
    #[serde(default = "default_operation_timeout_ms")]
    pub operation_timeout_ms: u64,
}

const fn default_operation_timeout_ms() -> u64 {
    2_000
}

impl StoreConfig {
    /// The operation timeout as a [`Duration`].
    #[must_use]
    pub const fn operation_timeout(&self) -> Duration {
        Duration::from_millis(self.operation_timeout_ms)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            operation_timeout_ms: default_operation_timeout_ms(),
        }
    }
}
