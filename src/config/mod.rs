//! Configuration management
//!
//! Values are resolved in layers, later layers winning: built-in defaults,
//! an optional YAML file, `MONITOR_*` environment variables, and finally
//! command-line overrides.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::{ConfigOverrides, ENV_ACCOUNT_ID, ENV_HOST, ENV_TIMEOUT, ENV_TOKEN};
pub use models::*;
pub use validation::Validate;

use crate::utils::error::{MonitorError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Complete configuration of a run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Remote API connection
    #[serde(default)]
    pub api: ApiConfig,
    /// HTTP client settings
    #[serde(default)]
    pub settings: ClientSettings,
    /// Field values for newly created monitors
    #[serde(default)]
    pub defaults: MonitorDefaults,
}

impl ToolConfig {
    /// Load configuration from a YAML file without validating it
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            MonitorError::config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content)
            .map_err(|e| MonitorError::config(format!("Failed to parse config: {}", e)))
    }

    /// Resolve every layer and validate the result
    pub async fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path).await?,
            None => Self::default(),
        };

        let config = config.with_env()?.with_overrides(overrides);
        config.validated()
    }

    /// Run the section validators, mapping failures to a configuration error
    pub fn validated(self) -> Result<Self> {
        Validate::validate(&self).map_err(MonitorError::Config)?;
        debug!("Configuration validation completed");
        Ok(self)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            MonitorError::config(format!("Failed to serialize config to YAML: {}", e))
        })
    }
}
