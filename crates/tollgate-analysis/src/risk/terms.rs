//! Scoring terms. Each term reads the metrics of one feature and may add to
//! the score and attach a reason.

use tollgate_core::types::numeric::format_decimal;
use tollgate_core::types::{MetricSet, Statistic};

/// What one term adds for one feature.
#[derive(Debug, Clone, PartialEq)]
pub struct TermContribution {
    pub score: f64,
    pub reason: Option<String>,
}

/// A pluggable contribution to the risk score.
pub trait RiskTerm: Send + Sync {
    /// Stable identifier, used in trace output.
    fn name(&self) -> &'static str;

    /// Contribution of `feature` given its criticality `weight`. `None`
    /// when the metrics this term needs are absent.
    fn contribute(&self, feature: &str, metrics: &MetricSet, weight: f64)
        -> Option<TermContribution>;
}

/// `null_rate * weight`, with a reason whenever the rate is positive.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRateTerm;

impl RiskTerm for NullRateTerm {
    fn name(&self) -> &'static str {
        "null_rate"
    }

    fn contribute(
        &self,
        feature: &str,
        metrics: &MetricSet,
        weight: f64,
    ) -> Option<TermContribution> {
        let rate = metrics.number(&Statistic::NullRate.key(feature))?;
        let reason = (rate > 0.0).then(|| format!("{feature}: null_rate={}", format_decimal(rate)));
        Some(TermContribution {
            score: rate * weight,
            reason,
        })
    }
}
