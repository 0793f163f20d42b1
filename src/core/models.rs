use serde::{Deserialize, Deserializer, Serialize};

/// Text message shared by the Slack (inbound) and Google Chat (outbound) webhooks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Google Chat message carrying the same text as a Slack message.
    #[must_use]
    pub fn to_google_chat(&self) -> Self {
        Self {
            text: self.text.clone(),
        }
    }
}

// `"text": null` leaves the text empty
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
