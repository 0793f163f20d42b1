//! Google Chat incoming-webhook client
//!
//! Posts a single JSON message per call. No timeout and no retry are
//! configured: a request either reaches the webhook once or fails.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::{info, warn};

use crate::core::models::Message;
use crate::errors::RelayError;

#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    origin: String,
}

impl ChatClient {
    /// # Errors
    ///
    /// Returns `RelayError::ConfigError` if the HTTP client cannot be built.
    pub fn new(origin: impl Into<String>) -> Result<Self, RelayError> {
        let http = Client::builder()
            .build()
            .map_err(|e| RelayError::ConfigError(format!("http client: {e}")))?;
        Ok(Self::with_client(http, origin))
    }

    pub fn with_client(http: Client, origin: impl Into<String>) -> Self {
        Self {
            http,
            origin: origin.into(),
        }
    }

    /// Webhook URL for a relayed request: origin, then the original path and raw query.
    ///
    /// ```
    /// use slack_chat_relay::clients::ChatClient;
    ///
    /// let client = ChatClient::new("https://chat.googleapis.com").unwrap();
    /// assert_eq!(
    ///     client.webhook_url("/v1/spaces/AAA/messages", Some("key=K&token=T")),
    ///     "https://chat.googleapis.com/v1/spaces/AAA/messages?key=K&token=T"
    /// );
    /// assert_eq!(
    ///     client.webhook_url("/v1/spaces/AAA/messages", Some("")),
    ///     "https://chat.googleapis.com/v1/spaces/AAA/messages"
    /// );
    /// ```
    #[must_use]
    pub fn webhook_url(&self, path: &str, query: Option<&str>) -> String {
        let mut url = format!("{}{}", self.origin, path);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(query);
        }
        url
    }

    /// Posts `message` as JSON to `url`.
    ///
    /// A non-2xx answer from Google Chat is logged but still returned as `Ok`;
    /// only encoding and transport failures are errors.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::EncodeError` if the message cannot be serialized and
    /// `RelayError::ForwardError` if the request cannot be delivered.
    pub async fn post_message(
        &self,
        url: &str,
        message: &Message,
    ) -> Result<reqwest::StatusCode, RelayError> {
        let buf = serde_json::to_vec(message)?;

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(buf)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!(status = %status, "Google Chat webhook accepted message");
        } else {
            warn!(status = %status, "Google Chat webhook returned non-success status");
        }

        Ok(status)
    }
}
