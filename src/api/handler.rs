//! Relay handler: Slack webhook in, Google Chat webhook out.
//!
//! Each request goes through, in order:
//! - method check (POST only)
//! - body decoding (JSON, or form-encoded `payload=`)
//! - space allow-list check
//! - translation and a single forward to Google Chat

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{OriginalUri, Path, State};
use axum::http::{HeaderMap, Method, Uri};
use axum::response::Response;
use serde::Deserialize;
use tracing::info;

use super::{helpers, parsing, router::AppState};
use crate::core::models::Message;
use crate::errors::RelayError;

/// Route parameters bound by `/v1/spaces/{space_id}/...`.
#[derive(Debug, Deserialize)]
pub struct RelayPath {
    pub space_id: String,
}

/// Axum handler for the relay routes.
///
/// Responds 200 once Google Chat has received the message, whatever status it
/// answers with. Rejections are logged and mapped by `RelayError::status_code`.
///
/// A space segment that does not percent-decode to UTF-8 does not fail the
/// request here; it only matters if the allow-list is on, where it is refused.
#[tracing::instrument(
    level = "info",
    skip_all,
    fields(method = %method, path = %uri.path())
)]
pub async fn relay_handler(
    State(state): State<AppState>,
    method: Method,
    space: Result<Path<RelayPath>, PathRejection>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let space_id = space.ok().map(|Path(RelayPath { space_id })| space_id);
    match relay(&state, &method, space_id.as_deref(), &uri, &headers, &body).await {
        Ok(()) => helpers::relayed(),
        Err(e) => helpers::reject(e),
    }
}

async fn relay(
    state: &AppState,
    method: &Method,
    space_id: Option<&str>,
    uri: &Uri,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<(), RelayError> {
    if *method != Method::POST {
        return Err(RelayError::MethodNotAllowed);
    }

    let slack_msg = parsing::decode_message(headers, body, uri.query())?;

    let allow_list = &state.config.allowed_space_ids;
    if allow_list.is_enabled() {
        match space_id {
            Some(id) if allow_list.permits(id) => {}
            Some(id) => return Err(RelayError::SpaceNotAllowed(id.to_string())),
            None => {
                return Err(RelayError::SpaceNotAllowed(
                    "undecodable space segment".to_string(),
                ));
            }
        }
    }

    let chat_msg = Message::to_google_chat(&slack_msg);

    #[cfg(feature = "debug-logs")]
    info!("Relaying message text: {:?}", chat_msg.text);

    #[cfg(not(feature = "debug-logs"))]
    info!("Relaying message with {} characters", chat_msg.text.chars().count());

    let url = state.chat.webhook_url(uri.path(), uri.query());
    state.chat.post_message(&url, &chat_msg).await?;

    Ok(())
}

/// Liveness probe. Always 200 `OK`.
pub async fn health_check() -> Response {
    helpers::healthy()
}
