//! Dashboard configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOOKBACK_HOURS, DEFAULT_TOP_REASONS};

/// Configuration for the decision-log dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardConfig {
    /// Lookback window in hours. Default: 24.
    pub lookback_hours: Option<u32>,
    /// Number of most frequent reasons to show. Default: 3.
    pub top_reasons: Option<usize>,
}

impl DashboardConfig {
    /// Returns the effective lookback window, defaulting to 24 hours.
    pub fn effective_lookback_hours(&self) -> u32 {
        self.lookback_hours.unwrap_or(DEFAULT_LOOKBACK_HOURS)
    }

    /// Returns the effective reason count, defaulting to 3.
    pub fn effective_top_reasons(&self) -> usize {
        self.top_reasons.unwrap_or(DEFAULT_TOP_REASONS)
    }
}
