//! HTTP client for the monitor endpoints

use super::types::{ApiResponse, ListQuery, Monitor, MonitorList, MonitorStatus};
use crate::config::{ApiConfig, ClientSettings, ToolConfig};
use crate::utils::error::{MonitorError, Result};
use crate::utils::logging::mask_token;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Header identifying the account every call acts on
pub const ACCOUNT_HEADER: &str = "x-proautoma-accountid";

/// Client for the `/api/monitors` collection of one account
#[derive(Debug, Clone)]
pub struct MonitorClient {
    http_client: reqwest::Client,
    monitors_url: Url,
}

impl MonitorClient {
    /// Create a client with the bearer token and account header preset
    pub fn new(api: &ApiConfig, settings: &ClientSettings) -> Result<Self> {
        let monitors_url = api.monitors_url()?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api.token.trim()))
            .map_err(|e| MonitorError::config(format!("Invalid token: {}", e)))?;
        auth.set_sensitive(true);

        let account = HeaderValue::from_str(api.account_id.trim())
            .map_err(|e| MonitorError::config(format!("Invalid account id: {}", e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCOUNT_HEADER, account);

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(settings.user_agent.clone())
            .timeout(Duration::from_secs(settings.timeout))
            .build()
            .map_err(|e| MonitorError::config(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "Monitor client ready for {} (account {}, token {})",
            monitors_url,
            api.account_id,
            mask_token(&api.token)
        );

        Ok(Self {
            http_client,
            monitors_url,
        })
    }

    /// Create a client from a resolved configuration
    pub fn from_config(config: &ToolConfig) -> Result<Self> {
        Self::new(&config.api, &config.settings)
    }

    /// URL of the monitor collection
    pub fn monitors_url(&self) -> &Url {
        &self.monitors_url
    }

    /// URL of a single monitor
    pub fn monitor_url(&self, id: &str) -> Result<Url> {
        if id.trim().is_empty() {
            return Err(MonitorError::validation("monitor id cannot be empty"));
        }

        let mut url = self.monitors_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                MonitorError::config(format!("{} cannot be a base URL", self.monitors_url))
            })?
            .push(id);
        Ok(url)
    }

    /// Fetch the monitors of the account
    pub async fn list(&self, query: ListQuery) -> Result<Vec<Monitor>> {
        let mut request = self.http_client.get(self.monitors_url.clone());
        if !query.is_empty() {
            request = request.query(&query);
        }

        let list: MonitorList = self.fetch(request).await?;
        let items = list.into_items();
        debug!("Listed {} monitors", items.len());
        Ok(items)
    }

    /// Fetch one monitor
    pub async fn get(&self, id: &str) -> Result<Monitor> {
        let url = self.monitor_url(id)?;
        self.fetch(self.http_client.get(url)).await
    }

    /// Register a new monitor (`PUT` on the collection)
    pub async fn create(&self, monitor: &Monitor) -> Result<ApiResponse> {
        debug!("Creating monitor {} -> {}", monitor.name, monitor.url);
        let request = self
            .http_client
            .put(self.monitors_url.clone())
            .json(monitor);
        self.send(request).await
    }

    /// Replace a monitor (`POST` on its URL); the record must carry its id
    pub async fn update(&self, monitor: &Monitor) -> Result<ApiResponse> {
        let id = monitor.id.as_deref().ok_or_else(|| {
            MonitorError::validation(format!("monitor '{}' has no id", monitor.name))
        })?;

        debug!("Updating monitor {}", id);
        let request = self.http_client.post(self.monitor_url(id)?).json(monitor);
        self.send(request).await
    }

    /// Send the record back with only its status changed
    pub async fn set_status(
        &self,
        monitor: &Monitor,
        status: MonitorStatus,
    ) -> Result<ApiResponse> {
        let updated = monitor.clone().with_status(status);
        self.update(&updated).await
    }

    /// Delete a monitor
    pub async fn delete(&self, id: &str) -> Result<ApiResponse> {
        debug!("Deleting monitor {}", id);
        let request = self.http_client.delete(self.monitor_url(id)?);
        self.send(request).await
    }

    /// Send a request and capture status and body regardless of the status
    async fn send(&self, request: RequestBuilder) -> Result<ApiResponse> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Monitor API answered {}: {}", status, body);
        }

        Ok(ApiResponse { status, body })
    }

    /// Send a request whose body must decode as `T`
    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.send(request).await?;
        if !response.is_success() {
            return Err(MonitorError::api(response.status, response.body));
        }
        Ok(response.json()?)
    }
}
