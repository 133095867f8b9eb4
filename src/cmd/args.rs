//! Argument definitions

use crate::api::ListQuery;
use crate::config::ConfigOverrides;
use crate::jobs::RunOptions;
use crate::utils::logging::LogFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Bulk create, pause, resume and delete monitors
#[derive(Parser, Debug)]
#[command(
    name = "monitor-bulk",
    author,
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true, env = "MONITOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// API host, e.g. https://stage.example.com
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Bearer token
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Account id sent in the account header
    #[arg(long, global = true)]
    pub account_id: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Show the requests without sending any that change data
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a monitor for every target.
    Create(CreateArgs),
    /// Pause every monitor of the account.
    Pause(FilterArgs),
    /// Set every paused monitor back to active.
    Resume(FilterArgs),
    /// Delete every monitor of the account.
    Delete(DeleteArgs),
    /// Print the monitors of the account.
    List(ListArgs),
}

#[derive(Args, Debug, Default)]
pub struct CreateArgs {
    /// File with one target per line; the built-in list is used otherwise
    #[arg(short, long)]
    pub targets: Option<PathBuf>,

    /// Polling frequency in seconds
    #[arg(short, long)]
    pub frequency: Option<u32>,

    /// Probe location; repeat for several
    #[arg(short, long = "location")]
    pub locations: Vec<String>,

    /// HTTP method the monitors use
    #[arg(short, long)]
    pub method: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Only touch monitors whose name or URL contains this text
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Confirm the deletion
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Index of the first monitor
    #[arg(long)]
    pub offset: Option<u64>,

    /// Maximum number of monitors
    #[arg(long)]
    pub limit: Option<u64>,
}

impl Cli {
    /// Configuration layer built from the flags
    pub fn overrides(&self) -> ConfigOverrides {
        let mut overrides = ConfigOverrides {
            host: self.host.clone(),
            token: self.token.clone(),
            account_id: self.account_id.clone(),
            timeout: self.timeout,
            ..Default::default()
        };

        if let Command::Create(args) = &self.command {
            overrides.method = args.method.clone();
            overrides.frequency = args.frequency;
            if !args.locations.is_empty() {
                overrides.locations = Some(args.locations.clone());
            }
        }

        overrides
    }

    /// Options shared by the jobs
    pub fn run_options(&self) -> RunOptions {
        let filter = match &self.command {
            Command::Pause(args) | Command::Resume(args) => args.filter.clone(),
            Command::Delete(args) => args.filter.filter.clone(),
            Command::List(args) => args.filter.filter.clone(),
            Command::Create(_) => None,
        };

        RunOptions {
            dry_run: self.dry_run,
            filter,
        }
    }
}

impl ListArgs {
    pub fn query(&self) -> ListQuery {
        ListQuery {
            offset: self.offset,
            limit: self.limit,
        }
    }
}
