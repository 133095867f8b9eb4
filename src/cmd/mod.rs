//! Command-line surface
//!
//! Argument definitions and the dispatch from a parsed command to a bulk job.

mod args;
mod execute;

pub use args::{Cli, Command, CreateArgs, DeleteArgs, FilterArgs, ListArgs};
pub use execute::execute;
