use std::collections::HashSet;
use std::env;

use crate::errors::RelayError;

pub const DEFAULT_PORT: u16 = 8080;
pub const GOOGLE_CHAT_ORIGIN: &str = "https://chat.googleapis.com";

/// Space identifiers permitted to relay.
///
/// The check is on whenever the configured value was non-empty, even if no
/// usable identifier survived parsing; in that case every space is refused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpaceAllowList {
    enabled: bool,
    ids: HashSet<String>,
}

impl SpaceAllowList {
    /// Parses a comma-separated list, trimming entries and skipping empty ones.
    ///
    /// ```
    /// use slack_chat_relay::core::config::SpaceAllowList;
    ///
    /// let list = SpaceAllowList::parse("AAA111, BBB222,,");
    /// assert_eq!(list.len(), 2);
    /// assert!(list.permits("BBB222"));
    /// assert!(!list.permits("CCC333"));
    ///
    /// assert!(!SpaceAllowList::parse("").is_enabled());
    /// assert!(!SpaceAllowList::parse(",").permits("AAA111"));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let ids = raw
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(ToString::to_string)
            .collect();
        Self {
            enabled: !raw.is_empty(),
            ids,
        }
    }

    /// False only when no allow-list was configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// True when `space_id` may relay. Everything is permitted when the check is off.
    #[must_use]
    pub fn permits(&self, space_id: &str) -> bool {
        !self.enabled || self.ids.contains(space_id)
    }
}

impl<S: Into<String>> FromIterator<S> for SpaceAllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let ids: HashSet<String> = iter.into_iter().map(Into::into).collect();
        Self {
            enabled: !ids.is_empty(),
            ids,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub allowed_space_ids: SpaceAllowList,
    pub port: u16,
    /// Scheme and host the relayed path is appended to, without a trailing slash.
    pub chat_origin: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            allowed_space_ids: SpaceAllowList::default(),
            port: DEFAULT_PORT,
            chat_origin: GOOGLE_CHAT_ORIGIN.to_string(),
        }
    }
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `RelayError::ConfigError` if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::ConfigError` if `PORT` is set but is not a valid port number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RelayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let allowed_space_ids = lookup("ALLOWED_SPACE_IDS")
            .map(|ids| SpaceAllowList::parse(&ids))
            .unwrap_or_default();

        let port = match lookup("PORT").filter(|p| !p.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| RelayError::ConfigError(format!("PORT: {e}")))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            allowed_space_ids,
            port,
            chat_origin: GOOGLE_CHAT_ORIGIN.to_string(),
        })
    }
}
