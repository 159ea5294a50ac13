// Error types for the reply relay

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    /// Client-caused request problems. The message is surfaced verbatim,
    /// so variants carry the exact text the caller should see.
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Fireworks API error: {0}")]
    UpstreamApi(String),

    #[error("Fireworks API timed out: {0}")]
    UpstreamTimeout(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RelayError {
    /// Redact credential-shaped substrings from error text before it is
    /// surfaced to the caller. Upstream errors may echo the request's key.
    pub fn sanitized(self) -> Self {
        use crate::utils::logging::sanitize;
        match self {
            RelayError::UpstreamApi(msg) => RelayError::UpstreamApi(sanitize(&msg)),
            RelayError::UpstreamTimeout(msg) => RelayError::UpstreamTimeout(sanitize(&msg)),
            RelayError::Internal(msg) => RelayError::Internal(sanitize(&msg)),
            other => other,
        }
    }
}

// Convert RelayError to HTTP responses for Axum
impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            RelayError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            RelayError::UpstreamApi(_) => (StatusCode::BAD_GATEWAY, self.to_string()),
            RelayError::UpstreamTimeout(_) => (StatusCode::GATEWAY_TIMEOUT, self.to_string()),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = json!({
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
