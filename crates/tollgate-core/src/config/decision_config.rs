//! Decision band configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ALERT_MIN_SCORE, ALERT_REASON, ALLOW_REASON, BLOCK_MIN_SCORE, BLOCK_REASON,
};
use crate::errors::ConfigError;
use crate::types::{DecisionName, Severity};

/// One row of the band table: scores at or above `min_score` (and below the
/// previous band) map to this decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandConfig {
    pub min_score: f64,
    pub decision: DecisionName,
    pub severity: Severity,
    pub reason: String,
}

/// Decision engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DecisionConfig {
    /// Bands ordered by descending `min_score`. The last band catches every
    /// lower score. Empty means the built-in table.
    pub bands: Vec<BandConfig>,
}

impl DecisionConfig {
    /// Returns the effective band table.
    pub fn effective_bands(&self) -> Vec<BandConfig> {
        if self.bands.is_empty() {
            Self::default_bands()
        } else {
            self.bands.clone()
        }
    }

    /// Check that every bound is finite and bounds strictly descend.
    pub fn validate_bands(bands: &[BandConfig]) -> Result<(), ConfigError> {
        for (i, band) in bands.iter().enumerate() {
            if !band.min_score.is_finite() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("decision.bands[{i}].min_score"),
                    message: "must be a finite number".to_string(),
                });
            }
            if i > 0 && band.min_score >= bands[i - 1].min_score {
                return Err(ConfigError::ValidationFailed {
                    field: format!("decision.bands[{i}].min_score"),
                    message: "bands must be ordered by strictly descending min_score"
                        .to_string(),
                });
            }
        }
        Ok(())
    }

    /// Block at 0.7, alert at 0.4, allow below.
    pub fn default_bands() -> Vec<BandConfig> {
        vec![
            BandConfig {
                min_score: BLOCK_MIN_SCORE,
                decision: DecisionName::BlockAndRollback,
                severity: Severity::Critical,
                reason: BLOCK_REASON.to_string(),
            },
            BandConfig {
                min_score: ALERT_MIN_SCORE,
                decision: DecisionName::AllowWithAlert,
                severity: Severity::Warn,
                reason: ALERT_REASON.to_string(),
            },
            BandConfig {
                min_score: 0.0,
                decision: DecisionName::Allow,
                severity: Severity::Info,
                reason: ALLOW_REASON.to_string(),
            },
        ]
    }
}
