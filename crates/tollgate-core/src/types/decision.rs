//! Risk score and remediation decision.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::numeric::round2;

/// Aggregated risk signal. Bounded below by zero, unbounded above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScore {
    pub score: f64,
    pub reasons: Vec<String>,
}

impl RiskScore {
    /// Build a score, rounding `raw` to two decimals.
    pub fn new(raw: f64, reasons: Vec<String>) -> Self {
        Self {
            score: round2(raw),
            reasons,
        }
    }

    pub fn zero() -> Self {
        Self::new(0.0, Vec::new())
    }
}

/// Remediation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionName {
    Allow,
    AllowWithAlert,
    BlockAndRollback,
}

impl DecisionName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allow => "ALLOW",
            Self::AllowWithAlert => "ALLOW_WITH_ALERT",
            Self::BlockAndRollback => "BLOCK_AND_ROLLBACK",
        }
    }

    /// Whether the artifact is accepted into the validated area.
    pub fn accepts(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

impl fmt::Display for DecisionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity attached to a decision, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warn,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Critical => "CRITICAL",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "INFO" => Some(Self::Info),
            "WARN" => Some(Self::Warn),
            "CRITICAL" => Some(Self::Critical),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The chosen action with its severity and human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub name: DecisionName,
    pub severity: Severity,
    pub reason: String,
}

impl Decision {
    pub fn new(name: DecisionName, severity: Severity, reason: impl Into<String>) -> Self {
        Self {
            name,
            severity,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.name, self.severity, self.reason)
    }
}
