//! monitor-bulk - bulk monitor jobs against a monitoring REST API

use anyhow::Context;
use clap::Parser;
use monitor_bulk::cmd::{Cli, execute};
use monitor_bulk::utils::logging::init_logging;
use std::process::ExitCode;
use tracing::{debug, warn};

#[tokio::main]
async fn main() -> ExitCode {
    // Loaded before parsing so MONITOR_CONFIG can come from .env; a missing file is fine
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    init_logging(cli.log_format, &cli.log_level);
    if let Ok(path) = dotenv {
        debug!("Loaded environment from {:?}", path);
    }

    match run(&cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Run the command; `Ok(false)` means some items failed
async fn run(cli: &Cli) -> anyhow::Result<bool> {
    let stdout = std::io::stdout();
    let report = execute(cli, stdout.lock())
        .await
        .context("monitor job failed")?;

    let Some(report) = report else {
        return Ok(true);
    };

    for failure in &report.failures {
        warn!("{} failed: {}", failure.label, failure.reason);
    }
    eprintln!("{}", report);

    Ok(!report.has_failures())
}
