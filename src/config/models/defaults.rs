//! Field values used when creating monitors from a target list

use super::*;
use serde::{Deserialize, Serialize};

/// Defaults applied to every monitor the create job registers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorDefaults {
    /// HTTP method the monitor uses against its target
    #[serde(default = "default_method")]
    pub method: String,
    /// Polling frequency in seconds
    #[serde(default = "default_frequency")]
    pub frequency: u32,
    /// Probe locations
    #[serde(default = "default_locations")]
    pub locations: Vec<String>,
    /// Prefix prepended to targets that carry no scheme
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,
}

impl Default for MonitorDefaults {
    fn default() -> Self {
        Self {
            method: default_method(),
            frequency: default_frequency(),
            locations: default_locations(),
            url_prefix: default_url_prefix(),
        }
    }
}
