//! Error handling for monitor-bulk
//!
//! This module defines the error type shared by the API client, the
//! configuration layer and the bulk jobs.

mod helpers;
mod types;

pub use types::{MonitorError, Result};
