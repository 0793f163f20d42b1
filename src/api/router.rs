use std::sync::Arc;

use axum::Router;
use axum::routing::any;
use tower_http::trace::TraceLayer;

use super::handler::{health_check, relay_handler};
use super::helpers;
use crate::clients::ChatClient;
use crate::core::config::AppConfig;
use crate::errors::RelayError;

/// Read-only context shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub chat: ChatClient,
}

impl AppState {
    /// # Errors
    ///
    /// Returns `RelayError::ConfigError` if the outbound HTTP client cannot be built.
    pub fn new(config: AppConfig) -> Result<Self, RelayError> {
        let chat = ChatClient::new(config.chat_origin.clone())?;
        Ok(Self {
            config: Arc::new(config),
            chat,
        })
    }
}

/// Builds the HTTP surface: `/healthcheck` and the `/v1/spaces/{space_id}/...` relay.
///
/// Every method is routed to the handlers so the relay can answer non-POST
/// calls with its own 405.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthcheck", any(health_check))
        .route("/v1/spaces/{space_id}", any(relay_handler))
        .route("/v1/spaces/{space_id}/{*rest}", any(relay_handler))
        .fallback(|| async { helpers::not_found() })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
