//! Validators for the configuration sections

use super::MIN_FREQUENCY;
use super::trait_def::Validate;
use crate::config::ToolConfig;
use crate::config::models::*;
use tracing::debug;

impl Validate for ToolConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating configuration");

        self.api.validate().map_err(|e| format!("api: {}", e))?;
        self.settings
            .validate()
            .map_err(|e| format!("settings: {}", e))?;
        self.defaults
            .validate()
            .map_err(|e| format!("defaults: {}", e))?;

        Ok(())
    }
}

impl Validate for ApiConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("host cannot be empty".to_string());
        }

        self.base_url().map_err(|e| e.to_string())?;

        if self.token.trim().is_empty() {
            return Err(
                "token is required (set it in the config file, MONITOR_API_TOKEN or --token)"
                    .to_string(),
            );
        }

        if self.account_id.trim().is_empty() {
            return Err(
                "account_id is required (set it in the config file, MONITOR_ACCOUNT_ID or --account-id)"
                    .to_string(),
            );
        }

        Ok(())
    }
}

impl Validate for ClientSettings {
    fn validate(&self) -> Result<(), String> {
        if self.timeout == 0 {
            return Err("timeout cannot be 0".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("user_agent cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Validate for MonitorDefaults {
    fn validate(&self) -> Result<(), String> {
        if self.method.trim().is_empty() {
            return Err("method cannot be empty".to_string());
        }

        if reqwest::Method::from_bytes(self.method.as_bytes()).is_err() {
            return Err(format!("'{}' is not a valid HTTP method", self.method));
        }

        if self.frequency < MIN_FREQUENCY {
            return Err(format!(
                "frequency must be at least {} seconds, got {}",
                MIN_FREQUENCY, self.frequency
            ));
        }

        if self.locations.is_empty() {
            return Err("at least one location is required".to_string());
        }

        if self.locations.iter().any(|l| l.trim().is_empty()) {
            return Err("locations cannot contain empty names".to_string());
        }

        Ok(())
    }
}
