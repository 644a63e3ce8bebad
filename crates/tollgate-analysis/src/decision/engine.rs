//! DecisionEngine: risk score -> decision.

use tollgate_core::config::DecisionConfig;
use tollgate_core::errors::ConfigError;
use tollgate_core::tracing::fields::SPAN_DECIDE;
use tollgate_core::types::{Decision, RiskScore};

use super::bands::BandTable;

/// Maps a score to an action. Out-of-range scores are not clamped and
/// violations are not consulted.
#[derive(Debug, Clone, Default)]
pub struct DecisionEngine {
    bands: BandTable,
}

impl DecisionEngine {
    pub fn new(bands: BandTable) -> Self {
        Self { bands }
    }

    pub fn from_config(config: &DecisionConfig) -> Result<Self, ConfigError> {
        BandTable::from_config(config).map(Self::new)
    }

    pub fn bands(&self) -> &BandTable {
        &self.bands
    }

    pub fn decide(&self, risk: &RiskScore) -> Decision {
        let span = tracing::info_span!(SPAN_DECIDE, score = risk.score);
        let _guard = span.enter();

        let decision = self.bands.decision_for(risk.score);
        tracing::info!(
            decision = %decision.name,
            severity = %decision.severity,
            "decision made"
        );
        decision
    }
}
