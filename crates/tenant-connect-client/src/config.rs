//! Client configuration.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::requester::TokenKind;
use crate::resolver::CONNECTION_INFO_PATH;

/// Configuration for talking to a deployment's API.
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the environment API (e.g., `https://abc123.live.example.com/api`).
    pub base_url: String,

    /// Token used for [`TokenKind::Api`] requests.
    pub api_token: String,

    /// Token used for [`TokenKind::PaaS`] requests. Falls back to `api_token`.
    #[serde(default)]
    pub paas_token: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "ClientConfig::default_timeout")]
    pub timeout_seconds: u64,

    /// Connect timeout in seconds.
    #[serde(default = "ClientConfig::default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

impl ClientConfig {
    /// Create a configuration with default timeouts and no PaaS token.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: api_token.into(),
            paas_token: None,
            timeout_seconds: Self::default_timeout(),
            connect_timeout_seconds: Self::default_connect_timeout(),
        }
    }

    /// Set the PaaS token.
    #[must_use]
    pub fn with_paas_token(mut self, token: impl Into<String>) -> Self {
        self.paas_token = Some(token.into());
        self
    }

    const fn default_timeout() -> u64 {
        30
    }

    const fn default_connect_timeout() -> u64 {
        5
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Full URL for `path`, which must start with `/`.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url())
    }

    /// Get the tenant connection info URL.
    #[must_use]
    pub fn connection_info_url(&self) -> String {
        self.url_for(CONNECTION_INFO_PATH)
    }

    /// The token to authenticate a request of the given kind with.
    #[must_use]
    pub fn token_for(&self, kind: TokenKind) -> &str {
        match kind {
            TokenKind::Api => &self.api_token,
            TokenKind::PaaS => self.paas_token.as_deref().unwrap_or(&self.api_token),
        }
    }

    /// Get the request timeout as a `Duration`.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Get the connect timeout as a `Duration`.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"<redacted>")
            .field("paas_token", &self.paas_token.as_ref().map(|_| "<redacted>"))
            .field("timeout_seconds", &self.timeout_seconds)
            .field("connect_timeout_seconds", &self.connect_timeout_seconds)
            .finish()
    }
}
