use std::path::Path;

use tollgate_core::config::CliOverrides;

use super::Context;
use crate::error::CliError;
use crate::render::Output;
use crate::ExitStatus;

/// Print the effective configuration with every default filled in.
pub fn run(root: &Path, overrides: &CliOverrides, output: &Output) -> Result<ExitStatus, CliError> {
    let ctx = Context::load(root, overrides)?;
    let effective = ctx.config.effective();
    let rendered = effective.to_toml()?;
    output.emit(&effective, |_| rendered)?;
    Ok(ExitStatus::Success)
}
