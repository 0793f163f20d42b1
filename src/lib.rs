//! Slack → Google Chat webhook relay.
//!
//! Accepts Slack-style incoming-webhook calls on `/v1/spaces/{space_id}/...`
//! and re-posts their `text` to the same path and query on
//! `https://chat.googleapis.com`, so a Slack integration can be pointed at a
//! Google Chat space by swapping the host.
//!
//! # Architecture
//!
//! The crate uses:
//! - axum for the HTTP surface
//! - reqwest for the outbound Google Chat webhook call
//! - an immutable `AppConfig` injected as router state (space allow-list, origin)
//! - Tokio for the async runtime
//!
//! # Example
//!
//! ```no_run
//! use slack_chat_relay::api::{AppState, build_router};
//! use slack_chat_relay::core::config::{AppConfig, SpaceAllowList};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     slack_chat_relay::setup_logging();
//!
//!     let config = AppConfig {
//!         allowed_space_ids: SpaceAllowList::parse("AAA111,BBB222"),
//!         ..AppConfig::default()
//!     };
//!     let app = build_router(AppState::new(config)?);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;

pub use errors::RelayError;

/// Configure structured JSON logging.
///
/// The level filter comes from `RUST_LOG` and defaults to `info`. Calling this
/// more than once is harmless; only the first call installs a subscriber.
///
/// # Example
///
/// ```
/// slack_chat_relay::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
