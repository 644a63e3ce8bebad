//! Dashboard summary over a lookback window of the decision log.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tollgate_core::errors::StorageError;
use tollgate_core::types::{LogEntry, Severity};

use super::trends::risk_trend;
use crate::log::DecisionLogReader;

/// Overall health rollup of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthSignal {
    Green,
    Yellow,
    Red,
}

impl HealthSignal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
            Self::Red => "RED",
        }
    }
}

impl fmt::Display for HealthSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReasonCount {
    pub reason: String,
    pub count: usize,
}

/// Serializable snapshot of every dashboard view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub lookback_hours: u32,
    pub total_events: usize,
    pub decision_counts: BTreeMap<String, usize>,
    pub severity_counts: BTreeMap<String, usize>,
    pub latest_decision: Option<LogEntry>,
    pub frequent_reasons: Vec<ReasonCount>,
    pub system_health: HealthSignal,
    pub risk_trend: Vec<f64>,
}

/// Decision log entries inside the lookback window ending at `now`.
#[derive(Debug, Clone)]
pub struct DashboardState {
    lookback_hours: u32,
    entries: Vec<LogEntry>,
}

impl DashboardState {
    /// Read the log and keep entries stamped within `lookback_hours` of `now`.
    pub fn load(
        reader: &DecisionLogReader,
        lookback_hours: u32,
        now: DateTime<Utc>,
    ) -> Result<Self, StorageError> {
        let entries = reader.read_all()?;
        let state = Self::from_entries(entries, lookback_hours, now);
        tracing::debug!(
            path = %reader.path().display(),
            lookback_hours,
            events = state.total_events(),
            "dashboard window loaded"
        );
        Ok(state)
    }

    /// Window pre-read entries. Entries with unreadable timestamps are dropped.
    pub fn from_entries(entries: Vec<LogEntry>, lookback_hours: u32, now: DateTime<Utc>) -> Self {
        let cutoff = now - Duration::hours(i64::from(lookback_hours));
        let entries = entries
            .into_iter()
            .filter(|e| e.parsed_timestamp().is_some_and(|ts| ts >= cutoff))
            .collect();
        Self {
            lookback_hours,
            entries,
        }
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn total_events(&self) -> usize {
        self.entries.len()
    }

    pub fn decision_counts(&self) -> BTreeMap<String, usize> {
        count_by(&self.entries, |e| &e.decision)
    }

    pub fn severity_counts(&self) -> BTreeMap<String, usize> {
        count_by(&self.entries, |e| &e.severity)
    }

    /// Most recent entry by timestamp; the later append wins a tie.
    pub fn latest_decision(&self) -> Option<&LogEntry> {
        self.entries.iter().max_by_key(|e| e.parsed_timestamp())
    }

    /// The `top_k` most frequent reasons, ties in order of first appearance.
    pub fn frequent_reasons(&self, top_k: usize) -> Vec<ReasonCount> {
        let mut counts: Vec<ReasonCount> = Vec::new();
        for entry in &self.entries {
            match counts.iter_mut().find(|c| c.reason == entry.reason) {
                Some(slot) => slot.count += 1,
                None => counts.push(ReasonCount {
                    reason: entry.reason.clone(),
                    count: 1,
                }),
            }
        }
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts.truncate(top_k);
        counts
    }

    pub fn system_health(&self) -> HealthSignal {
        let has = |severity: Severity| {
            self.entries
                .iter()
                .any(|e| e.severity == severity.as_str())
        };
        if has(Severity::Critical) {
            HealthSignal::Red
        } else if has(Severity::Warn) {
            HealthSignal::Yellow
        } else {
            HealthSignal::Green
        }
    }

    pub fn risk_trend(&self) -> Vec<f64> {
        risk_trend(&self.entries)
    }

    pub fn summary(&self, top_k: usize) -> DashboardSummary {
        DashboardSummary {
            lookback_hours: self.lookback_hours,
            total_events: self.total_events(),
            decision_counts: self.decision_counts(),
            severity_counts: self.severity_counts(),
            latest_decision: self.latest_decision().cloned(),
            frequent_reasons: self.frequent_reasons(top_k),
            system_health: self.system_health(),
            risk_trend: self.risk_trend(),
        }
    }
}

fn count_by<F>(entries: &[LogEntry], key: F) -> BTreeMap<String, usize>
where
    F: Fn(&LogEntry) -> &String,
{
    let mut counts = BTreeMap::new();
    for entry in entries {
        *counts.entry(key(entry).clone()).or_insert(0) += 1;
    }
    counts
}
