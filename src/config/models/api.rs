//! Remote API connection settings

use super::*;
use crate::utils::error::{MonitorError, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// Path of the monitor collection on the remote service
pub const MONITORS_PATH: &str = "api/monitors";

/// Connection settings of the monitoring API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Scheme, host and optional port of the service
    #[serde(default = "default_host")]
    pub host: String,
    /// Bearer token
    #[serde(default)]
    pub token: String,
    /// Value of the account header
    #[serde(default)]
    pub account_id: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            token: String::new(),
            account_id: String::new(),
        }
    }
}

impl ApiConfig {
    /// Parsed host, normalised to end with a slash so relative joins keep any path prefix
    pub fn base_url(&self) -> Result<Url> {
        let mut host = self.host.trim().to_string();
        if !host.ends_with('/') {
            host.push('/');
        }
        let url = Url::parse(&host)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(MonitorError::config(format!(
                "Unsupported scheme '{}' in host {}",
                other, self.host
            ))),
        }
    }

    /// URL of the monitor collection
    pub fn monitors_url(&self) -> Result<Url> {
        Ok(self.base_url()?.join(MONITORS_PATH)?)
    }
}
