//! Monitoring API client
//!
//! Thin typed wrapper over the remote `/api/monitors` collection: list, get,
//! create, update and delete, authenticated with a bearer token and the
//! account header.

mod client;
pub mod types;

pub use client::{ACCOUNT_HEADER, MonitorClient};
pub use types::{ApiResponse, ListQuery, Monitor, MonitorList, MonitorStatus};
