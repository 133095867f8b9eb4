//! Dispatch of a parsed command

use super::args::{Cli, Command};
use crate::api::MonitorClient;
use crate::config::ToolConfig;
use crate::jobs::{BatchReport, BulkRunner, TargetList};
use crate::utils::error::{MonitorError, Result};
use std::io::Write;
use tracing::info;

/// Resolve the configuration, run the selected job and return its report.
///
/// `list` has no report and yields `None`.
pub async fn execute<W: Write>(cli: &Cli, out: W) -> Result<Option<BatchReport>> {
    let config = ToolConfig::load(cli.config.as_deref(), &cli.overrides()).await?;

    if let Command::Delete(args) = &cli.command {
        if !args.yes && !cli.dry_run {
            return Err(MonitorError::validation(
                "refusing to delete without --yes (use --dry-run to preview)",
            ));
        }
    }

    let client = MonitorClient::from_config(&config)?;
    let mut runner = BulkRunner::new(&client, cli.run_options(), out);

    let report = match &cli.command {
        Command::Create(args) => {
            let targets = match &args.targets {
                Some(path) => TargetList::from_file(path).await?,
                None => TargetList::builtin(),
            };
            let monitors = targets.to_monitors(&config.defaults);
            Some(runner.create_all(&monitors).await?)
        }
        Command::Pause(_) => Some(runner.pause_all().await?),
        Command::Resume(_) => Some(runner.resume_all().await?),
        Command::Delete(_) => Some(runner.delete_all().await?),
        Command::List(args) => {
            let count = runner.list_all(args.query()).await?;
            info!("Listed {} monitors", count);
            None
        }
    };

    runner.into_output().flush()?;
    Ok(report)
}
