//! Error types for the result relay.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Result type alias for relay operations.
pub type Result<T> = std::result::Result<T, RelayError>;

/// Errors that can occur while receiving or forwarding a game result.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Anything but POST on the result endpoint
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Body is not JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// One or more required fields missing or empty
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Webhook request could not be sent or completed
    #[error("Webhook request failed: {0}")]
    Forward(#[from] reqwest::Error),

    /// Relay configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RelayError {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::InvalidJson(_) | Self::MissingFields(_) => StatusCode::BAD_REQUEST,
            Self::Forward(_) | Self::Config(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match &self {
            Self::MethodNotAllowed => json!({ "error": "Method not allowed" }),
            Self::MissingFields(fields) => json!({
                "error": "Missing required fields",
                "fields": fields,
            }),
            Self::InvalidJson(msg) => json!({ "error": "Invalid JSON", "message": msg }),
            Self::Forward(_) | Self::Config(_) | Self::Io(_) => {
                error!(error = %self, "error processing game result");
                json!({
                    "error": "Internal server error",
                    "message": self.to_string(),
                })
            }
        };

        (status, Json(body)).into_response()
    }
}
