//! Response builders shared by the relay and health handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use crate::errors::RelayError;

pub const RELAYED_BODY: &str = "Message translated and sent to Google Chat";
pub const HEALTHY_BODY: &str = "OK";

/// Returns a 200 OK confirming the message was handed to Google Chat.
#[must_use]
pub fn relayed() -> Response {
    (StatusCode::OK, RELAYED_BODY).into_response()
}

/// Returns the liveness 200 OK.
#[must_use]
pub fn healthy() -> Response {
    (StatusCode::OK, HEALTHY_BODY).into_response()
}

#[must_use]
pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not found").into_response()
}

/// Logs a rejected request and converts the error into its HTTP response.
pub fn reject(err: RelayError) -> Response {
    let status = err.status_code();
    if status.is_server_error() {
        error!(status = status.as_u16(), "{}", err);
    } else {
        warn!(status = status.as_u16(), "{}", err);
    }
    err.into_response()
}
