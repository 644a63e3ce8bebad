//! Criticality weight table.

use tollgate_core::config::ScoringConfig;
use tollgate_core::constants::{DEFAULT_TIER_1_WEIGHT, DEFAULT_TIER_2_WEIGHT};
use tollgate_core::types::Criticality;

/// Multiplier applied to every term contribution of a feature, by tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightTable {
    tier_1: f64,
    tier_2: f64,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self {
            tier_1: DEFAULT_TIER_1_WEIGHT,
            tier_2: DEFAULT_TIER_2_WEIGHT,
        }
    }
}

impl WeightTable {
    pub fn new(tier_1: f64, tier_2: f64) -> Self {
        Self { tier_1, tier_2 }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            tier_1: config.effective_weight(&Criticality::Tier1),
            tier_2: config.effective_weight(&Criticality::Tier2),
        }
    }

    /// Unknown tiers weigh the same as tier_2.
    pub fn weight(&self, criticality: &Criticality) -> f64 {
        match criticality {
            Criticality::Tier1 => self.tier_1,
            Criticality::Tier2 | Criticality::Other(_) => self.tier_2,
        }
    }
}
