use std::path::Path;

use tollgate_analysis::pipeline::Pipeline;
use tollgate_core::config::CliOverrides;

use super::Context;
use crate::error::CliError;
use crate::render::Output;
use crate::ExitStatus;

pub fn run(root: &Path, overrides: &CliOverrides, output: &Output) -> Result<ExitStatus, CliError> {
    let ctx = Context::load(root, overrides)?;
    let (contract, dataset) = ctx.inputs()?;
    let pipeline = Pipeline::from_config(&ctx.config)?;

    let outcome = pipeline.check(&dataset, &contract);
    output.emit(&outcome, |console| console.check(&outcome))?;

    Ok(if outcome.passed {
        ExitStatus::Success
    } else {
        ExitStatus::CheckFailed
    })
}
