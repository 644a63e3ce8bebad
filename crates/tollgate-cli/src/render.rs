//! Console and JSON output for each command.

use std::fmt::Write as _;
use std::io::IsTerminal;

use serde::Serialize;
use tollgate_analysis::pipeline::{CheckOutcome, PipelineOutcome};
use tollgate_core::types::numeric::format_decimal;
use tollgate_core::types::Severity;
use tollgate_storage::materialized::{DashboardSummary, HealthSignal};

/// Output mode chosen on the command line.
pub struct Output {
    json: bool,
    console: ConsoleRenderer,
}

impl Output {
    pub fn new(json: bool) -> Self {
        let use_color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self {
            json,
            console: ConsoleRenderer::new(use_color),
        }
    }

    /// Print `value` as pretty JSON, or the console rendering otherwise.
    pub fn emit<T: Serialize>(
        &self,
        value: &T,
        console: impl FnOnce(&ConsoleRenderer) -> String,
    ) -> Result<(), serde_json::Error> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            print!("{}", console(&self.console));
        }
        Ok(())
    }
}

/// Human-readable terminal output.
pub struct ConsoleRenderer {
    use_color: bool,
}

impl ConsoleRenderer {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.use_color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn severity(&self, severity: Severity) -> String {
        let code = match severity {
            Severity::Critical => "31", // red
            Severity::Warn => "33",     // yellow
            Severity::Info => "36",     // cyan
        };
        self.paint(severity.as_str(), code)
    }

    fn health(&self, health: HealthSignal) -> String {
        let code = match health {
            HealthSignal::Red => "31",
            HealthSignal::Yellow => "33",
            HealthSignal::Green => "32",
        };
        self.paint(health.as_str(), code)
    }

    pub fn check(&self, outcome: &CheckOutcome) -> String {
        let mut out = String::new();
        let verdict = if outcome.passed {
            self.paint("PASS", "32")
        } else {
            self.paint("FAIL", "31")
        };
        let _ = writeln!(
            out,
            "{verdict} risk={} (fail threshold {})",
            format_decimal(outcome.risk.score),
            format_decimal(outcome.fail_threshold)
        );
        for reason in &outcome.risk.reasons {
            let _ = writeln!(out, "  - {reason}");
        }
        if outcome.violations > 0 {
            let _ = writeln!(out, "  {} missing column(s)", outcome.violations);
        }
        out
    }

    pub fn pipeline(&self, outcome: &PipelineOutcome) -> String {
        let evaluation = &outcome.evaluation;
        let mut out = String::new();
        let _ = writeln!(out, "Decision: {}", evaluation.decision.name);
        let _ = writeln!(out, "Severity: {}", self.severity(evaluation.decision.severity));
        let _ = writeln!(out, "Reason: {}", evaluation.decision.reason);
        let _ = writeln!(out, "Risk: {}", format_decimal(evaluation.risk.score));
        for reason in &evaluation.risk.reasons {
            let _ = writeln!(out, "  - {reason}");
        }
        for violation in &evaluation.validation.violations {
            let _ = writeln!(out, "  ! {}: {}", violation.feature, violation.kind);
        }
        out
    }

    pub fn dashboard(&self, summary: &DashboardSummary) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Tollgate dashboard (last {}h)", summary.lookback_hours);
        let _ = writeln!(out, "Health: {}", self.health(summary.system_health));
        let _ = writeln!(out, "Events: {}", summary.total_events);

        if !summary.decision_counts.is_empty() {
            let _ = writeln!(out, "\nDecisions:");
            for (name, count) in &summary.decision_counts {
                let _ = writeln!(out, "  {name:<20} {count}");
            }
        }
        if !summary.severity_counts.is_empty() {
            let _ = writeln!(out, "\nSeverities:");
            for (name, count) in &summary.severity_counts {
                let _ = writeln!(out, "  {name:<20} {count}");
            }
        }
        if let Some(latest) = &summary.latest_decision {
            let _ = writeln!(
                out,
                "\nLatest: {} [{}] {} ({}, {})",
                latest.decision, latest.severity, latest.reason, latest.source_file, latest.timestamp
            );
        }
        if !summary.frequent_reasons.is_empty() {
            let _ = writeln!(out, "\nTop reasons:");
            for entry in &summary.frequent_reasons {
                let _ = writeln!(out, "  {:>4}  {}", entry.count, entry.reason);
            }
        }
        if !summary.risk_trend.is_empty() {
            let trend: Vec<String> = summary.risk_trend.iter().map(|v| format_decimal(*v)).collect();
            let _ = writeln!(out, "\nRisk trend: {}", trend.join(" "));
        }
        out
    }
}
