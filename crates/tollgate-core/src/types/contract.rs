//! Data contract: declared features with criticality tiers and constraints.
//!
//! Feature order is the order of declaration in the source document. It
//! drives metric, violation and reason ordering, so the feature set is an
//! ordered list rather than a hash map.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::errors::ContractError;

/// Weighting class of a feature. Tiers other than `tier_1` and `tier_2` are
/// kept verbatim and weighted like `tier_2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Criticality {
    Tier1,
    #[default]
    Tier2,
    Other(String),
}

impl Criticality {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Tier1 => "tier_1",
            Self::Tier2 => "tier_2",
            Self::Other(name) => name,
        }
    }
}

impl From<String> for Criticality {
    fn from(name: String) -> Self {
        match name.as_str() {
            "tier_1" => Self::Tier1,
            "tier_2" => Self::Tier2,
            _ => Self::Other(name),
        }
    }
}

impl From<Criticality> for String {
    fn from(criticality: Criticality) -> Self {
        match criticality {
            Criticality::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Criticality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value attached to a `min`/`max` constraint. Only the presence of the key
/// matters today; `Unset` records an explicit null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstraintValue {
    Number(f64),
    Text(String),
    Unset,
}

/// Declared constraints of one feature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    #[serde(deserialize_with = "declared", skip_serializing_if = "Option::is_none")]
    pub min: Option<ConstraintValue>,
    #[serde(deserialize_with = "declared", skip_serializing_if = "Option::is_none")]
    pub max: Option<ConstraintValue>,
    #[serde(deserialize_with = "truthy")]
    pub unique: bool,
}

impl Constraints {
    pub fn declares_min(&self) -> bool {
        self.min.is_some()
    }

    pub fn declares_max(&self) -> bool {
        self.max.is_some()
    }
}

/// A key that is present counts as declared, even with a null value.
fn declared<'de, D>(deserializer: D) -> Result<Option<ConstraintValue>, D::Error>
where
    D: Deserializer<'de>,
{
    ConstraintValue::deserialize(deserializer).map(Some)
}

/// Flag values as a contract author writes them: booleans, numbers, strings
/// or null. Zero, empty and null read as false.
fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Float(f64),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        None => false,
        Some(Flag::Bool(b)) => b,
        Some(Flag::Int(i)) => i != 0,
        Some(Flag::Float(f)) => f != 0.0,
        Some(Flag::Text(s)) => !s.is_empty(),
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Declared expectations for a single feature column.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureSpec {
    /// Declared type. Informational; the observed dtype is reported separately.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub expected_type: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub criticality: Criticality,
    #[serde(default, deserialize_with = "null_as_default")]
    pub constraints: Constraints,
}

impl FeatureSpec {
    pub fn new(criticality: Criticality) -> Self {
        Self {
            criticality,
            ..Self::default()
        }
    }

    pub fn tier_1() -> Self {
        Self::new(Criticality::Tier1)
    }

    pub fn tier_2() -> Self {
        Self::new(Criticality::Tier2)
    }

    pub fn with_type(mut self, expected_type: impl Into<String>) -> Self {
        self.expected_type = Some(expected_type.into());
        self
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.constraints.min = Some(ConstraintValue::Number(min));
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.constraints.max = Some(ConstraintValue::Number(max));
        self
    }

    pub fn unique(mut self) -> Self {
        self.constraints.unique = true;
        self
    }
}

/// Ordered, duplicate-free set of declared features.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureSet {
    entries: Vec<(String, FeatureSpec)>,
}

impl FeatureSet {
    fn insert(&mut self, name: String, spec: FeatureSpec) -> Result<(), ContractError> {
        if self.entries.iter().any(|(existing, _)| *existing == name) {
            return Err(ContractError::DuplicateFeature(name));
        }
        self.entries.push((name, spec));
        Ok(())
    }
}

impl Serialize for FeatureSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, spec) in &self.entries {
            map.serialize_entry(name, spec)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FeatureSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FeatureSetVisitor;

        impl<'de> Visitor<'de> for FeatureSetVisitor {
            type Value = FeatureSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of feature name to feature spec")
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(FeatureSet::default())
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut features = FeatureSet::default();
                while let Some((name, spec)) = map.next_entry::<String, FeatureSpec>()? {
                    features
                        .insert(name, spec)
                        .map_err(|e| de::Error::custom(e.to_string()))?;
                }
                Ok(features)
            }
        }

        deserializer.deserialize_map(FeatureSetVisitor)
    }
}

/// The declared schema of a dataset. Immutable once loaded; shared
/// read-only by the validator and the risk scorer for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractSpec {
    #[serde(default)]
    features: FeatureSet,
}

impl ContractSpec {
    /// Build a contract from `(name, spec)` pairs, keeping their order.
    pub fn from_features<I, S>(features: I) -> Result<Self, ContractError>
    where
        I: IntoIterator<Item = (S, FeatureSpec)>,
        S: Into<String>,
    {
        let mut set = FeatureSet::default();
        for (name, spec) in features {
            set.insert(name.into(), spec)?;
        }
        Ok(Self { features: set })
    }

    /// Iterate features in declaration order.
    pub fn features(&self) -> impl Iterator<Item = (&str, &FeatureSpec)> {
        self.features
            .entries
            .iter()
            .map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn feature(&self, name: &str) -> Option<&FeatureSpec> {
        self.features
            .entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, spec)| spec)
    }

    pub fn len(&self) -> usize {
        self.features.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_features_rejects_duplicates() {
        let err = ContractSpec::from_features([
            ("user_id", FeatureSpec::tier_1()),
            ("user_id", FeatureSpec::tier_2()),
        ])
        .unwrap_err();
        assert!(matches!(err, ContractError::DuplicateFeature(ref n) if n == "user_id"));
    }

    #[test]
    fn json_keeps_declaration_order() {
        let json = r#"{"features": {
            "zeta": {"criticality": "tier_1"},
            "alpha": {"criticality": "tier_2", "constraints": {"unique": true}},
            "mid": {}
        }}"#;
        let contract: ContractSpec = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = contract.features().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert_eq!(contract.feature("mid").unwrap().criticality, Criticality::Tier2);
        assert!(contract.feature("alpha").unwrap().constraints.unique);
    }

    #[test]
    fn null_constraint_counts_as_declared() {
        let json = r#"{"features": {"age": {"constraints": {"min": null, "max": 120}}}}"#;
        let contract: ContractSpec = serde_json::from_str(json).unwrap();
        let constraints = &contract.feature("age").unwrap().constraints;
        assert_eq!(constraints.min, Some(ConstraintValue::Unset));
        assert_eq!(constraints.max, Some(ConstraintValue::Number(120.0)));
        assert!(!constraints.unique);
    }

    #[test]
    fn null_constraints_block_is_empty() {
        let json = r#"{"features": {"age": {"criticality": "tier_1", "constraints": null}}}"#;
        let contract: ContractSpec = serde_json::from_str(json).unwrap();
        let spec = contract.feature("age").unwrap();
        assert!(!spec.constraints.declares_min());
        assert!(!spec.constraints.declares_max());
    }

    #[test]
    fn unknown_criticality_is_kept() {
        let json = r#"{"features": {"age": {"criticality": "tier_3"}, "id": {"criticality": "TIER_1"}}}"#;
        let contract: ContractSpec = serde_json::from_str(json).unwrap();
        let age = &contract.feature("age").unwrap().criticality;
        assert_eq!(*age, Criticality::Other("tier_3".to_string()));
        assert_eq!(age.as_str(), "tier_3");
        assert_eq!(
            contract.feature("id").unwrap().criticality,
            Criticality::Other("TIER_1".to_string())
        );

        let json = serde_json::to_string(&contract).unwrap();
        assert!(json.contains(r#""criticality":"tier_3""#));
    }

    #[test]
    fn unique_flag_reads_truthiness() {
        let json = r#"{"features": {
            "a": {"constraints": {"unique": null}},
            "b": {"constraints": {"unique": 1}},
            "c": {"constraints": {"unique": 0}},
            "d": {"constraints": {"unique": "yes"}}
        }}"#;
        let contract: ContractSpec = serde_json::from_str(json).unwrap();
        let unique = |name: &str| contract.feature(name).unwrap().constraints.unique;
        assert!(!unique("a"));
        assert!(unique("b"));
        assert!(!unique("c"));
        assert!(unique("d"));
    }
}
