//! Environment and command-line layers of the configuration

use super::ToolConfig;
use crate::utils::error::{MonitorError, Result};
use tracing::debug;

/// Environment variable holding the API host
pub const ENV_HOST: &str = "MONITOR_HOST";
/// Environment variable holding the bearer token
pub const ENV_TOKEN: &str = "MONITOR_API_TOKEN";
/// Environment variable holding the account id
pub const ENV_ACCOUNT_ID: &str = "MONITOR_ACCOUNT_ID";
/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT: &str = "MONITOR_TIMEOUT";

/// Values given on the command line; `None` leaves the lower layers alone
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub token: Option<String>,
    pub account_id: Option<String>,
    pub timeout: Option<u64>,
    pub method: Option<String>,
    pub frequency: Option<u32>,
    pub locations: Option<Vec<String>>,
}

impl ToolConfig {
    /// Apply `MONITOR_*` variables from the process environment.
    ///
    /// Only the known keys are read, so unrelated variables holding
    /// non-Unicode data are never looked at. A known key whose value is not
    /// valid Unicode is a configuration error.
    pub fn with_env(self) -> Result<Self> {
        let mut vars = Vec::new();
        for key in [ENV_HOST, ENV_TOKEN, ENV_ACCOUNT_ID, ENV_TIMEOUT] {
            match std::env::var(key) {
                Ok(value) => vars.push((key, value)),
                Err(std::env::VarError::NotPresent) => {}
                Err(e) => {
                    return Err(MonitorError::config(format!("Invalid {}: {}", key, e)));
                }
            }
        }
        self.with_env_vars(vars)
    }

    /// Apply `MONITOR_*` variables from an explicit list of pairs
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in vars {
            let value = value.into();
            if value.is_empty() {
                continue;
            }

            match key.as_ref() {
                ENV_HOST => self.api.host = value,
                ENV_TOKEN => self.api.token = value,
                ENV_ACCOUNT_ID => self.api.account_id = value,
                ENV_TIMEOUT => {
                    self.settings.timeout = value.parse().map_err(|e| {
                        MonitorError::config(format!("Invalid {}: {}", ENV_TIMEOUT, e))
                    })?;
                }
                _ => continue,
            }
            debug!("Applied {} from environment", key.as_ref());
        }

        Ok(self)
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(host) = &overrides.host {
            self.api.host = host.clone();
        }
        if let Some(token) = &overrides.token {
            self.api.token = token.clone();
        }
        if let Some(account_id) = &overrides.account_id {
            self.api.account_id = account_id.clone();
        }
        if let Some(timeout) = overrides.timeout {
            self.settings.timeout = timeout;
        }
        if let Some(method) = &overrides.method {
            self.defaults.method = method.to_uppercase();
        }
        if let Some(frequency) = overrides.frequency {
            self.defaults.frequency = frequency;
        }
        if let Some(locations) = &overrides.locations {
            self.defaults.locations = locations.clone();
        }
        self
    }
}
