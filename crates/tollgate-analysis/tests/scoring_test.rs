//! Risk scoring and decision properties.

use proptest::prelude::*;
use tollgate_analysis::decision::DecisionEngine;
use tollgate_analysis::risk::{RiskScorer, RiskTerm, TermContribution, WeightTable};
use tollgate_analysis::validation::Validator;
use tollgate_core::types::{
    Cell, Column, ContractSpec, Criticality, Dataset, DecisionName, FeatureSpec, MetricSet,
    MetricSetBuilder, MetricValue, RiskScore, Statistic, Table,
};

fn metrics(rates: &[(&str, f64)]) -> MetricSet {
    let mut builder = MetricSetBuilder::new();
    for (feature, rate) in rates {
        builder.record(feature, Statistic::NullRate, MetricValue::Number(*rate));
    }
    builder.finish(10)
}

#[test]
fn test_tier_weighting_and_additivity() {
    let scorer = RiskScorer::default();

    let tier_1 = ContractSpec::from_features([("a", FeatureSpec::tier_1())]).unwrap();
    assert_eq!(scorer.compute(&metrics(&[("a", 0.3)]), &tier_1).score, 0.3);

    let tier_2 = ContractSpec::from_features([("a", FeatureSpec::tier_2())]).unwrap();
    assert_eq!(scorer.compute(&metrics(&[("a", 0.3)]), &tier_2).score, 0.15);

    let both = ContractSpec::from_features([
        ("a", FeatureSpec::tier_1()),
        ("b", FeatureSpec::tier_2()),
    ])
    .unwrap();
    let risk = scorer.compute(&metrics(&[("a", 0.3), ("b", 0.4)]), &both);
    assert_eq!(risk.score, 0.5);
}

#[test]
fn test_configured_weights_apply() {
    let scorer = RiskScorer::new(WeightTable::new(2.0, 0.0));
    let contract = ContractSpec::from_features([
        ("a", FeatureSpec::tier_1()),
        ("b", FeatureSpec::tier_2()),
    ])
    .unwrap();
    let risk = scorer.compute(&metrics(&[("a", 0.25), ("b", 1.0)]), &contract);
    assert_eq!(risk.score, 0.5);
    // Zero weight still explains the null rate.
    assert_eq!(risk.reasons, vec!["a: null_rate=0.25", "b: null_rate=1.0"]);
}

#[test]
fn test_reasons_follow_contract_order_and_skip_clean_features() {
    let contract = ContractSpec::from_features([
        ("z", FeatureSpec::tier_2()),
        ("clean", FeatureSpec::tier_1()),
        ("a", FeatureSpec::tier_1()),
    ])
    .unwrap();
    let risk = RiskScorer::default().compute(
        &metrics(&[("a", 1.0 / 3.0), ("clean", 0.0), ("z", 1.0)]),
        &contract,
    );
    assert_eq!(risk.reasons, vec!["z: null_rate=1.0", "a: null_rate=0.33"]);
}

#[test]
fn test_missing_column_contributes_nothing() {
    let table = Table::new(vec![Column::new(
        "present",
        vec![Cell::Null, Cell::Int(1)],
    )])
    .unwrap();
    let dataset = Dataset::new(table, "batch.csv");
    let contract = ContractSpec::from_features([
        ("absent", FeatureSpec::tier_1()),
        ("present", FeatureSpec::tier_1()),
    ])
    .unwrap();

    let validation = Validator::new().validate(&dataset, &contract);
    assert_eq!(validation.violations.len(), 1);
    let risk = RiskScorer::default().compute(&validation.metrics, &contract);
    assert_eq!(risk.score, 0.5);
    assert_eq!(risk.reasons, vec!["present: null_rate=0.5"]);

    let decision = DecisionEngine::default().decide(&risk);
    assert_eq!(decision.name, DecisionName::AllowWithAlert);
}

fn nulls_then_ints(nulls: usize, rows: usize) -> Column {
    let cells = (0..rows)
        .map(|i| if i < nulls { Cell::Null } else { Cell::Int(i as i64) })
        .collect::<Vec<_>>();
    Column::new("user_age", cells)
}

#[test]
fn test_score_rounds_stored_value_below_block_band() {
    let dataset = Dataset::new(Table::new(vec![nulls_then_ints(139, 200)]).unwrap(), "b.csv");
    let contract = ContractSpec::from_features([("user_age", FeatureSpec::tier_1())]).unwrap();

    let validation = Validator::new().validate(&dataset, &contract);
    let risk = RiskScorer::default().compute(&validation.metrics, &contract);
    assert_eq!(risk.score, 0.69);
    assert_eq!(risk.reasons, vec!["user_age: null_rate=0.69"]);

    let decision = DecisionEngine::default().decide(&risk);
    assert_eq!(decision.name, DecisionName::AllowWithAlert);
}

#[test]
fn test_reason_rounds_stored_value() {
    let contract = ContractSpec::from_features([("f", FeatureSpec::tier_1())]).unwrap();
    let risk = RiskScorer::default().compute(&metrics(&[("f", 3.0 / 200.0)]), &contract);
    assert_eq!(risk.score, 0.01);
    assert_eq!(risk.reasons, vec!["f: null_rate=0.01"]);

    let risk = RiskScorer::default().compute(&metrics(&[("f", 0.005)]), &contract);
    assert_eq!(risk.score, 0.01);
    assert_eq!(risk.reasons, vec!["f: null_rate=0.01"]);
}

#[test]
fn test_unknown_tier_scores_like_tier_2() {
    let tier_3 = FeatureSpec::new(Criticality::Other("tier_3".to_string()));
    let contract = ContractSpec::from_features([("a", tier_3)]).unwrap();
    let risk = RiskScorer::default().compute(&metrics(&[("a", 0.4)]), &contract);
    assert_eq!(risk.score, 0.2);
    assert_eq!(risk.reasons, vec!["a: null_rate=0.4"]);
}

struct FlatPenalty;

impl RiskTerm for FlatPenalty {
    fn name(&self) -> &'static str {
        "flat"
    }

    fn contribute(&self, feature: &str, _: &MetricSet, weight: f64) -> Option<TermContribution> {
        Some(TermContribution {
            score: 0.1 * weight,
            reason: Some(format!("{feature}: flat")),
        })
    }
}

#[test]
fn test_custom_terms_run_in_registration_order() {
    let scorer = RiskScorer::with_terms(
        WeightTable::default(),
        vec![Box::new(tollgate_analysis::risk::NullRateTerm), Box::new(FlatPenalty)],
    );
    let contract = ContractSpec::from_features([("a", FeatureSpec::tier_1())]).unwrap();
    let risk = scorer.compute(&metrics(&[("a", 0.5)]), &contract);
    assert_eq!(risk.score, 0.6);
    assert_eq!(risk.reasons, vec!["a: null_rate=0.5", "a: flat"]);
}

proptest! {
    #[test]
    fn prop_bands_partition_scores(score in -1.0f64..5.0) {
        let decision = DecisionEngine::default().decide(&RiskScore { score, reasons: vec![] });
        let expected = if score >= 0.7 {
            DecisionName::BlockAndRollback
        } else if score >= 0.4 {
            DecisionName::AllowWithAlert
        } else {
            DecisionName::Allow
        };
        prop_assert_eq!(decision.name, expected);
    }

    #[test]
    fn prop_score_is_nonnegative_and_reasons_track_positive_rates(
        rates in proptest::collection::vec(0.0f64..=1.0, 1..8),
        tiers in proptest::collection::vec(any::<bool>(), 8),
    ) {
        let names: Vec<String> = (0..rates.len()).map(|i| format!("f{i}")).collect();
        let contract = ContractSpec::from_features(names.iter().zip(&tiers).map(|(n, t)| {
            (n.clone(), if *t { FeatureSpec::tier_1() } else { FeatureSpec::tier_2() })
        }))
        .unwrap();
        let pairs: Vec<(&str, f64)> = names.iter().map(String::as_str).zip(rates.iter().copied()).collect();
        let risk = RiskScorer::default().compute(&metrics(&pairs), &contract);

        prop_assert!(risk.score >= 0.0);
        let positive = rates.iter().filter(|r| **r > 0.0).count();
        prop_assert_eq!(risk.reasons.len(), positive);
    }
}
