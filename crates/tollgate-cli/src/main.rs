#![forbid(unsafe_code)]

mod commands;
mod error;
mod render;

use std::path::PathBuf;
use std::process::ExitCode as ProcessExitCode;

use clap::{Parser, Subcommand};
use tollgate_core::errors::TollgateErrorCode;

use crate::error::CliError;

/// Process exit statuses.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    CheckFailed = 1,
    Fatal = 2,
}

#[derive(Parser)]
#[command(name = "tollgate")]
#[command(version = tollgate_core::constants::VERSION)]
#[command(about = "Data-contract quality gate: validate, score, decide, record")]
struct Cli {
    /// Project root; relative paths and `tollgate.toml` resolve against it.
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,
    /// Contract document (overrides `paths.contract`).
    #[arg(long, global = true)]
    contract: Option<String>,
    /// Incoming area (overrides `paths.incoming`).
    #[arg(long, global = true)]
    incoming: Option<String>,
    /// Decision log file (overrides `paths.decision_log`).
    #[arg(long, global = true)]
    decision_log: Option<String>,
    /// Machine-readable JSON output.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score the newest dataset without acting on it. Exits 1 on failure.
    Check {
        /// Scores at or above this value fail the check.
        #[arg(long)]
        fail_threshold: Option<f64>,
    },
    /// Validate, score, decide, move the artifact and record the decision.
    Pipeline,
    /// Summarize recent decisions from the decision log.
    Dashboard {
        #[arg(long)]
        lookback_hours: Option<u32>,
        /// Number of most frequent reasons to show.
        #[arg(long)]
        top: Option<usize>,
    },
    /// Print the effective configuration.
    Config,
}

fn main() -> ProcessExitCode {
    match run() {
        Ok(status) => ProcessExitCode::from(status as u8),
        Err(err) => {
            eprintln!("{}", err.coded_string());
            ProcessExitCode::from(ExitStatus::Fatal as u8)
        }
    }
}

fn run() -> Result<ExitStatus, CliError> {
    let cli = Cli::parse();
    tollgate_core::tracing::init_tracing();

    let mut overrides = tollgate_core::config::CliOverrides {
        contract: cli.contract,
        incoming: cli.incoming,
        decision_log: cli.decision_log,
        ..Default::default()
    };
    let output = render::Output::new(cli.json);

    match cli.command {
        Commands::Check { fail_threshold } => {
            overrides.check_fail_threshold = fail_threshold;
            commands::check::run(&cli.root, &overrides, &output)
        }
        Commands::Pipeline => commands::pipeline::run(&cli.root, &overrides, &output),
        Commands::Dashboard {
            lookback_hours,
            top,
        } => {
            overrides.lookback_hours = lookback_hours;
            overrides.top_reasons = top;
            commands::dashboard::run(&cli.root, &overrides, &output)
        }
        Commands::Config => commands::config::run(&cli.root, &overrides, &output),
    }
}
