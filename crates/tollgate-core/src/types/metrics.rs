//! Validation metrics and structural violations.

use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// Key of the row-count metric, always present.
pub const ROW_COUNT_KEY: &str = "row_count";

/// Per-feature statistics the validator can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    NullRate,
    Dtype,
    Min,
    Max,
    DuplicateRatio,
}

impl Statistic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NullRate => "null_rate",
            Self::Dtype => "dtype",
            Self::Min => "min",
            Self::Max => "max",
            Self::DuplicateRatio => "duplicate_ratio",
        }
    }

    /// Metric key for this statistic on `feature`: `"<feature>.<statistic>"`.
    pub fn key(&self, feature: &str) -> String {
        format!("{feature}.{}", self.as_str())
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded metric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
    Null,
}

impl MetricValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
            Self::Null => f.write_str("null"),
        }
    }
}

/// Metrics of one validation run, in recording order. Only constructible
/// through [`MetricSetBuilder::finish`], which sets `row_count`.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSet {
    entries: Vec<(String, MetricValue)>,
}

impl MetricSet {
    pub fn get(&self, key: &str) -> Option<&MetricValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Numeric value under `key`, if present and numeric.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(MetricValue::as_f64)
    }

    /// Value of `statistic` recorded for `feature`.
    pub fn feature(&self, feature: &str, statistic: Statistic) -> Option<&MetricValue> {
        self.get(&statistic.key(feature))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn row_count(&self) -> usize {
        self.number(ROW_COUNT_KEY).map_or(0, |v| v as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for MetricSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Accumulates metrics during validation.
#[derive(Debug, Default)]
pub struct MetricSetBuilder {
    entries: Vec<(String, MetricValue)>,
}

impl MetricSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `statistic` for `feature`, replacing an earlier value.
    pub fn record(&mut self, feature: &str, statistic: Statistic, value: MetricValue) {
        self.insert(statistic.key(feature), value);
    }

    fn insert(&mut self, key: String, value: MetricValue) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Seal the set, recording `row_count` last.
    pub fn finish(mut self, row_count: usize) -> MetricSet {
        self.insert(ROW_COUNT_KEY.to_string(), MetricValue::Number(row_count as f64));
        MetricSet {
            entries: self.entries,
        }
    }
}

/// Kind of structural problem found during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    MissingColumn,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingColumn => "missing_column",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structural problem, independent of the numeric risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub feature: String,
    #[serde(rename = "type")]
    pub kind: ViolationKind,
}

impl Violation {
    pub fn missing_column(feature: impl Into<String>) -> Self {
        Self {
            feature: feature.into(),
            kind: ViolationKind::MissingColumn,
        }
    }
}
