//! Configuration and message types

pub mod config;
pub mod models;

pub use config::{AppConfig, SpaceAllowList};
pub use models::Message;
