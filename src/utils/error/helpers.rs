//! Helper functions for creating and inspecting errors

use super::types::MonitorError;
use reqwest::StatusCode;

impl MonitorError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn api<S: Into<String>>(status: StatusCode, body: S) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// HTTP status attached to the error, if the service answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Whether the error happened before any request could be sent
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::Yaml(_) | Self::Validation(_) | Self::Url(_)
        )
    }

    /// Whether the service rejected the credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }
}
