//! HTTP surface: routing, request parsing and the relay handler

pub mod handler;
pub mod helpers;
pub mod parsing;
pub mod router;

// Re-export the entry points for convenience
pub use handler::{health_check, relay_handler};
pub use router::{AppState, build_router};
