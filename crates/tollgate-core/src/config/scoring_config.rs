//! Risk scoring configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TIER_1_WEIGHT, DEFAULT_TIER_2_WEIGHT};
use crate::types::Criticality;

/// Criticality weights used by the risk scorer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight of tier_1 features. Default: 1.0.
    pub tier_1_weight: Option<f64>,
    /// Weight of tier_2 features. Default: 0.5.
    pub tier_2_weight: Option<f64>,
}

impl ScoringConfig {
    /// Returns the effective weight for `criticality`. Unknown tiers share
    /// the tier_2 weight.
    pub fn effective_weight(&self, criticality: &Criticality) -> f64 {
        match criticality {
            Criticality::Tier1 => self.tier_1_weight.unwrap_or(DEFAULT_TIER_1_WEIGHT),
            Criticality::Tier2 | Criticality::Other(_) => {
                self.tier_2_weight.unwrap_or(DEFAULT_TIER_2_WEIGHT)
            }
        }
    }
}
