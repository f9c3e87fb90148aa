use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why the one-shot dataset fetch did not produce records. The core stays
/// unloaded after any of these; there is no retry.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadError {
    #[error("request failed: {message}")]
    Transport { message: String },

    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error("response body could not be decoded: {message}")]
    Decode { message: String },

    #[error("response body was empty")]
    EmptyBody,
}

impl LoadError {
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "NETWORK_ERROR",
            Self::Status { .. } => "HTTP_STATUS_ERROR",
            Self::Decode { .. } => "DESERIALIZATION_ERROR",
            Self::EmptyBody => "EMPTY_RESPONSE",
        }
    }

    #[must_use]
    pub fn user_facing_message(&self) -> String {
        match self {
            Self::Transport { .. } => {
                "Unable to connect. Please check your internet connection.".into()
            }
            Self::Status { status } if *status >= 500 => {
                "The data service is currently unavailable.".into()
            }
            Self::Status { .. } => "The data service rejected the request.".into(),
            Self::Decode { .. } | Self::EmptyBody => {
                "The data service returned data we could not read.".into()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("page size must be at least 1")]
    ZeroPageSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(
            LoadError::Transport { message: "dns".into() }.code(),
            "NETWORK_ERROR"
        );
        assert_eq!(LoadError::Status { status: 404 }.code(), "HTTP_STATUS_ERROR");
        assert_eq!(LoadError::EmptyBody.code(), "EMPTY_RESPONSE");
    }

    #[test]
    fn server_errors_read_as_unavailable() {
        let msg = LoadError::Status { status: 503 }.user_facing_message();
        assert!(msg.contains("unavailable"));
        let msg = LoadError::Status { status: 403 }.user_facing_message();
        assert!(msg.contains("rejected"));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(LoadError::Status { status: 500 }).unwrap();
        assert_eq!(json["kind"], "status");
        assert_eq!(json["status"], 500);
    }
}
