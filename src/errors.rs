use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Error decoding JSON request: {0}")]
    JsonBodyError(String),

    #[error("Error decoding Slack message: {0}")]
    FormPayloadError(String),

    #[error("Space ID not allowed: {0}")]
    SpaceNotAllowed(String),

    #[error("Error encoding Google Chat message: {0}")]
    EncodeError(String),

    #[error("Error sending message to Google Chat webhook: {0}")]
    ForwardError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl RelayError {
    /// HTTP status reported to the Slack-side caller.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::JsonBodyError(_) | RelayError::FormPayloadError(_) => {
                StatusCode::BAD_REQUEST
            }
            RelayError::SpaceNotAllowed(_) => StatusCode::FORBIDDEN,
            RelayError::EncodeError(_)
            | RelayError::ForwardError(_)
            | RelayError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Body sent back to the caller. Detail stays in the logs.
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            RelayError::MethodNotAllowed => "Method not allowed",
            RelayError::JsonBodyError(_) => "Error decoding JSON request",
            RelayError::FormPayloadError(_) => "Error decoding Slack message",
            RelayError::SpaceNotAllowed(_) => "Space ID not allowed",
            RelayError::EncodeError(_) => "Error encoding Google Chat message",
            RelayError::ForwardError(_) => "Error sending message to Google Chat webhook",
            RelayError::ConfigError(_) => "Relay is misconfigured",
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        RelayError::ForwardError(error.to_string())
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(error: serde_json::Error) -> Self {
        RelayError::EncodeError(error.to_string())
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status_code(), self.public_message()).into_response()
    }
}
