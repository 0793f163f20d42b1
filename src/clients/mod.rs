//! Client modules for external API interactions

pub mod chat_client;

pub use chat_client::ChatClient;
