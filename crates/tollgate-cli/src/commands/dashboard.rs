use std::path::Path;

use chrono::Utc;
use tollgate_core::config::CliOverrides;
use tollgate_core::tracing::fields::SPAN_DASHBOARD;
use tollgate_storage::log::DecisionLogReader;
use tollgate_storage::materialized::DashboardState;

use super::Context;
use crate::error::CliError;
use crate::render::Output;
use crate::ExitStatus;

pub fn run(root: &Path, overrides: &CliOverrides, output: &Output) -> Result<ExitStatus, CliError> {
    let ctx = Context::load(root, overrides)?;
    let lookback_hours = ctx.config.dashboard.effective_lookback_hours();
    let top_reasons = ctx.config.dashboard.effective_top_reasons();

    let span = tracing::info_span!(SPAN_DASHBOARD, lookback_hours, top_reasons);
    let _guard = span.enter();

    let reader = DecisionLogReader::new(&ctx.paths.decision_log);
    let state = DashboardState::load(&reader, lookback_hours, Utc::now())?;
    let summary = state.summary(top_reasons);
    output.emit(&summary, |console| console.dashboard(&summary))?;
    Ok(ExitStatus::Success)
}
