//! # monitor-bulk
//!
//! Bulk operations against a synthetic-monitoring REST API: register an
//! uptime monitor for every domain of a list, pause or resume every monitor
//! of an account, or delete them all.
//!
//! Each job is one sequential pass. Requests carry a bearer token and the
//! account header, and every raw response is printed as it arrives.
//!
//! ## Library use
//!
//! ```rust,no_run
//! use monitor_bulk::{BulkRunner, MonitorClient, RunOptions, TargetList, ToolConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ToolConfig::from_file("config/monitor-bulk.yaml")
//!         .await?
//!         .validated()?;
//!     let client = MonitorClient::from_config(&config)?;
//!
//!     let monitors = TargetList::builtin().to_monitors(&config.defaults);
//!     let mut runner = BulkRunner::new(&client, RunOptions::default(), std::io::stdout());
//!     let report = runner.create_all(&monitors).await?;
//!     println!("{}", report);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod api;
pub mod cmd;
pub mod config;
pub mod jobs;
pub mod utils;

pub use api::{ApiResponse, ListQuery, Monitor, MonitorClient, MonitorStatus};
pub use config::{ConfigOverrides, ToolConfig};
pub use jobs::{BatchReport, BulkRunner, RunOptions, TargetList};
pub use utils::error::{MonitorError, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
