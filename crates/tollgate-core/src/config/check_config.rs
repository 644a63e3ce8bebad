//! `check` command configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CHECK_FAIL_THRESHOLD;

/// Configuration for the score-only gate.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CheckConfig {
    /// Score at or above which `check` fails. Default: 0.4.
    pub fail_threshold: Option<f64>,
}

impl CheckConfig {
    /// Returns the effective fail threshold, defaulting to 0.4.
    pub fn effective_fail_threshold(&self) -> f64 {
        self.fail_threshold.unwrap_or(DEFAULT_CHECK_FAIL_THRESHOLD)
    }
}
