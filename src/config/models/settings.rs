//! HTTP client settings

use super::*;
use serde::{Deserialize, Serialize};

/// Settings of the underlying HTTP client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
