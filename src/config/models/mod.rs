//! Configuration data models
//!
//! This module defines the configuration structures used by the client and the jobs.

#![allow(missing_docs)]

pub mod api;
pub mod defaults;
pub mod settings;

pub use api::*;
pub use defaults::*;
pub use settings::*;

/// Default API host
pub fn default_host() -> String {
    "http://localhost:8080".to_string()
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default user agent sent with every request
pub fn default_user_agent() -> String {
    format!("monitor-bulk/{}", env!("CARGO_PKG_VERSION"))
}

/// Default HTTP method of new monitors
pub fn default_method() -> String {
    "GET".to_string()
}

/// Default polling frequency of new monitors, in seconds
pub fn default_frequency() -> u32 {
    60
}

/// Default probe locations of new monitors
pub fn default_locations() -> Vec<String> {
    vec!["us-east1".to_string()]
}

/// Prefix turning a bare domain into a monitored URL
pub fn default_url_prefix() -> String {
    "https://www.".to_string()
}
