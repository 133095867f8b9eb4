//! Bulk jobs over the monitors of one account
//!
//! - `targets`: where new monitors come from
//! - `runner`: the create, pause, resume, delete and list passes
//! - `report`: outcome tally of a pass

pub mod report;
pub mod runner;
pub mod targets;

pub use report::{BatchReport, Failure};
pub use runner::{BulkRunner, RunOptions};
pub use targets::{DEFAULT_TARGETS, TargetList, monitor_for_target, target_url};
