//! End-to-end evaluation: validate, score, decide, and optionally act.

use serde::Serialize;
use tollgate_core::config::TollgateConfig;
use tollgate_core::constants::DEFAULT_CHECK_FAIL_THRESHOLD;
use tollgate_core::errors::{ActionError, ConfigError};
use tollgate_core::types::{ContractSpec, Dataset, Decision, LogEntry, RiskScore};

use crate::decision::DecisionEngine;
use crate::enforcement::ActionExecutor;
use crate::risk::{RiskScorer, WeightTable};
use crate::validation::{ValidationResult, Validator};

/// Result of the pure stages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub validation: ValidationResult,
    pub risk: RiskScore,
    pub decision: Decision,
}

/// Result of a full run including the side effect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineOutcome {
    pub evaluation: Evaluation,
    pub log_entry: LogEntry,
}

/// Result of a side-effect-free check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub risk: RiskScore,
    pub violations: usize,
    pub fail_threshold: f64,
    pub passed: bool,
}

/// Validator, scorer and engine wired for one configuration.
#[derive(Debug)]
pub struct Pipeline {
    validator: Validator,
    scorer: RiskScorer,
    engine: DecisionEngine,
    fail_threshold: f64,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(RiskScorer::default(), DecisionEngine::default())
    }
}

impl Pipeline {
    pub fn new(scorer: RiskScorer, engine: DecisionEngine) -> Self {
        Self {
            validator: Validator::new(),
            scorer,
            engine,
            fail_threshold: DEFAULT_CHECK_FAIL_THRESHOLD,
        }
    }

    /// Build from weights, bands and check threshold in `config`.
    pub fn from_config(config: &TollgateConfig) -> Result<Self, ConfigError> {
        let scorer = RiskScorer::new(WeightTable::from_config(&config.scoring));
        let engine = DecisionEngine::from_config(&config.decision)?;
        Ok(Self::new(scorer, engine).with_fail_threshold(config.check.effective_fail_threshold()))
    }

    pub fn with_fail_threshold(mut self, fail_threshold: f64) -> Self {
        self.fail_threshold = fail_threshold;
        self
    }

    pub fn fail_threshold(&self) -> f64 {
        self.fail_threshold
    }

    /// Validate, score and decide without touching storage.
    pub fn evaluate(&self, dataset: &Dataset, contract: &ContractSpec) -> Evaluation {
        let validation = self.validator.validate(dataset, contract);
        let risk = self.scorer.compute(&validation.metrics, contract);
        let decision = self.engine.decide(&risk);
        Evaluation {
            validation,
            risk,
            decision,
        }
    }

    /// Evaluate, then apply the decision through `executor`.
    pub fn run(
        &self,
        dataset: &Dataset,
        contract: &ContractSpec,
        executor: &mut ActionExecutor,
    ) -> Result<PipelineOutcome, ActionError> {
        let evaluation = self.evaluate(dataset, contract);
        let log_entry = executor.execute(&evaluation.decision, dataset)?;
        Ok(PipelineOutcome {
            evaluation,
            log_entry,
        })
    }

    /// Score only. Passes when the score is below the fail threshold.
    pub fn check(&self, dataset: &Dataset, contract: &ContractSpec) -> CheckOutcome {
        let validation = self.validator.validate(dataset, contract);
        let risk = self.scorer.compute(&validation.metrics, contract);
        let passed = risk.score < self.fail_threshold;
        tracing::info!(score = risk.score, passed, "check complete");
        CheckOutcome {
            risk,
            violations: validation.violations.len(),
            fail_threshold: self.fail_threshold,
            passed,
        }
    }
}
