//! Validated band table.

use tollgate_core::config::{BandConfig, DecisionConfig};
use tollgate_core::errors::ConfigError;
use tollgate_core::types::Decision;

/// Bands ordered by strictly descending `min_score`. Lower bounds are
/// inclusive and the last band catches every lower score.
#[derive(Debug, Clone, PartialEq)]
pub struct BandTable {
    bands: Vec<BandConfig>,
}

impl Default for BandTable {
    fn default() -> Self {
        Self {
            bands: DecisionConfig::default_bands(),
        }
    }
}

impl BandTable {
    /// Build a table, rejecting empty or unordered band lists.
    pub fn new(bands: Vec<BandConfig>) -> Result<Self, ConfigError> {
        if bands.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "decision.bands".to_string(),
                message: "at least one band is required".to_string(),
            });
        }
        DecisionConfig::validate_bands(&bands)?;
        Ok(Self { bands })
    }

    pub fn from_config(config: &DecisionConfig) -> Result<Self, ConfigError> {
        Self::new(config.effective_bands())
    }

    pub fn bands(&self) -> &[BandConfig] {
        &self.bands
    }

    /// The first band whose lower bound `score` reaches, else the last band.
    pub fn lookup(&self, score: f64) -> &BandConfig {
        self.bands
            .iter()
            .find(|band| score >= band.min_score)
            .unwrap_or_else(|| &self.bands[self.bands.len() - 1])
    }

    pub fn decision_for(&self, score: f64) -> Decision {
        let band = self.lookup(score);
        Decision::new(band.decision, band.severity, band.reason.clone())
    }
}
