//! Types exchanged with the monitoring API

use crate::config::{default_frequency, default_method};
use reqwest::StatusCode;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A monitor record as the remote service stores it.
///
/// Only the fields this tool reads or writes are typed. Everything else the
/// service returns lands in `extra` and is sent back unchanged on update.
/// Optional fields the service left out stay out when the record is sent
/// back, and `createdAt` is kept as the exact string the service returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monitor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: MonitorStatus,
    #[serde(default = "default_method", deserialize_with = "method_or_get")]
    pub method: String,
    pub url: String,
    /// Polling interval in seconds
    #[serde(
        default,
        deserialize_with = "frequency_from_any",
        skip_serializing_if = "Option::is_none"
    )]
    pub frequency: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Monitor {
    /// A new, unsaved, active GET monitor
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: None,
            created_at: None,
            name: name.into(),
            status: MonitorStatus::Active,
            method: default_method(),
            url: url.into(),
            frequency: Some(default_frequency()),
            locations: None,
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn with_frequency(mut self, frequency: u32) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn with_locations(mut self, locations: Vec<String>) -> Self {
        self.locations = Some(locations);
        self
    }

    pub fn with_status(mut self, status: MonitorStatus) -> Self {
        self.status = status;
        self
    }

    /// Short label for output lines: the id when known, otherwise the name
    pub fn label(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }
}

/// Status flag of a monitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MonitorStatus {
    #[default]
    Active,
    Paused,
    /// Any status this tool does not manage, kept verbatim
    Other(String),
}

impl MonitorStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for MonitorStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "active" => Self::Active,
            "paused" => Self::Paused,
            _ => Self::Other(s),
        }
    }
}

impl From<MonitorStatus> for String {
    fn from(status: MonitorStatus) -> Self {
        match status {
            MonitorStatus::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for MonitorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of the list endpoint: either a bare array or a paged envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum MonitorList {
    Page {
        items: Vec<Monitor>,
        #[serde(default)]
        total: Option<u64>,
    },
    Plain(Vec<Monitor>),
}

impl MonitorList {
    pub fn into_items(self) -> Vec<Monitor> {
        match self {
            Self::Page { items, .. } => items,
            Self::Plain(items) => items,
        }
    }
}

/// Pagination of the list endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

impl ListQuery {
    pub fn is_empty(&self) -> bool {
        self.offset.is_none() && self.limit.is_none()
    }
}

/// Raw outcome of one call: status and body text, whatever the status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Response [{}]>", self.status.as_u16())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn method_or_get<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_method))
}

/// Accepts `60`, `"60"` or `null`
fn frequency_from_any<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Frequency {
        Number(u32),
        Text(String),
    }

    match Option::<Frequency>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Frequency::Number(n)) => Ok(Some(n)),
        Some(Frequency::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("invalid frequency '{}'", s))),
    }
}
