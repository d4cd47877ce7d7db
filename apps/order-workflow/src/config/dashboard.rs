//! Dashboard configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the fleet dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// How many of the most recently created orders are annotated with
    /// their timelines.
    #[serde(default = "default_recent_window")]
    pub recent_window: usize,
}

const fn default_recent_window() -> usize {
    10
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_window: default_recent_window(),
        }
    }
}
