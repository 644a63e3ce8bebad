//! RiskScorer: metrics + contract -> bounded-below score with reasons.

use tollgate_core::tracing::fields::SPAN_RISK;
use tollgate_core::types::{ContractSpec, MetricSet, RiskScore};

use super::terms::{NullRateTerm, RiskTerm};
use super::weights::WeightTable;

/// Sums weighted term contributions over the contract's features.
pub struct RiskScorer {
    weights: WeightTable,
    terms: Vec<Box<dyn RiskTerm>>,
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::new(WeightTable::default())
    }
}

impl std::fmt::Debug for RiskScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.terms.iter().map(|t| t.name()).collect();
        f.debug_struct("RiskScorer")
            .field("weights", &self.weights)
            .field("terms", &names)
            .finish()
    }
}

impl RiskScorer {
    /// Scorer with the built-in null-rate term.
    pub fn new(weights: WeightTable) -> Self {
        Self::with_terms(weights, vec![Box::new(NullRateTerm)])
    }

    /// Scorer with a custom, ordered term list.
    pub fn with_terms(weights: WeightTable, terms: Vec<Box<dyn RiskTerm>>) -> Self {
        Self { weights, terms }
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    /// Score `metrics` feature by feature in contract order, each term in
    /// registration order. Absent metrics contribute nothing.
    pub fn compute(&self, metrics: &MetricSet, contract: &ContractSpec) -> RiskScore {
        let span = tracing::info_span!(SPAN_RISK, features = contract.len());
        let _guard = span.enter();

        let mut raw = 0.0;
        let mut reasons = Vec::new();
        for (feature, spec) in contract.features() {
            let weight = self.weights.weight(&spec.criticality);
            for term in &self.terms {
                let Some(contribution) = term.contribute(feature, metrics, weight) else {
                    continue;
                };
                raw += contribution.score;
                if let Some(reason) = contribution.reason {
                    tracing::debug!(feature, term = term.name(), %reason, "risk contribution");
                    reasons.push(reason);
                }
            }
        }

        let risk = RiskScore::new(raw, reasons);
        tracing::info!(score = risk.score, reasons = risk.reasons.len(), "risk computed");
        risk
    }
}
