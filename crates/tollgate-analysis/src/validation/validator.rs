//! Validator: dataset + contract -> metrics + structural violations.

use serde::Serialize;
use tollgate_core::tracing::fields::SPAN_VALIDATE;
use tollgate_core::types::{
    ContractSpec, Dataset, MetricSet, MetricSetBuilder, MetricValue, Statistic, Violation,
};

use super::column_stats;

/// Findings for one dataset. Violations follow contract order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub metrics: MetricSet,
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Stateless contract validator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Compute metrics for every declared feature present in the dataset.
    /// A missing column yields a violation and no metrics; it is never fatal.
    pub fn validate(&self, dataset: &Dataset, contract: &ContractSpec) -> ValidationResult {
        let span = tracing::info_span!(
            SPAN_VALIDATE,
            source_id = dataset.source_id().unwrap_or("-"),
            features = contract.len()
        );
        let _guard = span.enter();

        let table = dataset.table();
        let mut metrics = MetricSetBuilder::new();
        let mut violations = Vec::new();

        for (feature, spec) in contract.features() {
            let Some(column) = table.column(feature) else {
                tracing::warn!(feature, "declared feature missing from dataset");
                violations.push(Violation::missing_column(feature));
                continue;
            };

            let null_rate = column_stats::null_rate(column);
            metrics.record(feature, Statistic::NullRate, MetricValue::Number(null_rate));
            metrics.record(
                feature,
                Statistic::Dtype,
                MetricValue::Text(column_stats::dtype(column).to_string()),
            );
            if spec.constraints.declares_min() {
                metrics.record(feature, Statistic::Min, column_stats::min_value(column));
            }
            if spec.constraints.declares_max() {
                metrics.record(feature, Statistic::Max, column_stats::max_value(column));
            }
            if spec.constraints.unique {
                metrics.record(
                    feature,
                    Statistic::DuplicateRatio,
                    MetricValue::Number(column_stats::duplicate_ratio(column)),
                );
            }
            tracing::debug!(feature, null_rate, "feature validated");
        }

        let metrics = metrics.finish(dataset.row_count());
        tracing::info!(
            rows = dataset.row_count(),
            metrics = metrics.len(),
            violations = violations.len(),
            "validation complete"
        );
        ValidationResult {
            metrics,
            violations,
        }
    }
}
