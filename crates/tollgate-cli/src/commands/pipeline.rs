use std::path::Path;

use tollgate_analysis::enforcement::{ActionExecutor, StorageAreas};
use tollgate_analysis::pipeline::Pipeline;
use tollgate_core::config::CliOverrides;
use tollgate_storage::log::DecisionLog;

use super::Context;
use crate::error::CliError;
use crate::render::Output;
use crate::ExitStatus;

pub fn run(root: &Path, overrides: &CliOverrides, output: &Output) -> Result<ExitStatus, CliError> {
    let ctx = Context::load(root, overrides)?;
    let pipeline = Pipeline::from_config(&ctx.config)?;
    let (contract, dataset) = ctx.inputs()?;

    let log = DecisionLog::open(&ctx.paths.decision_log)?;
    let mut executor = ActionExecutor::new(StorageAreas::from_paths(&ctx.paths), log)?;

    let outcome = pipeline.run(&dataset, &contract, &mut executor)?;
    output.emit(&outcome, |console| console.pipeline(&outcome))?;
    Ok(ExitStatus::Success)
}
