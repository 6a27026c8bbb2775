//! HTTP requester used by the resolver.
//!
//! The resolver only sees raw response bytes and a status code. This module
//! defines that seam and provides the `reqwest` implementation.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// The credential a request is authenticated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// General API token.
    Api,
    /// Platform-as-a-service token, used for installer endpoints.
    PaaS,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api => write!(f, "api"),
            Self::PaaS => write!(f, "paas"),
        }
    }
}

/// Status code and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Create a response from a status and body.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Trait for issuing authenticated requests against the deployment API.
///
/// Implementations own URL construction, authentication and timeouts.
#[async_trait]
pub trait ApiRequester: Send + Sync {
    /// Issue an authenticated GET for `path`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Transport` if the request cannot be completed.
    /// Non-2xx responses are not errors at this level.
    async fn request(&self, path: &str, kind: TokenKind) -> Result<RawResponse>;
}

#[async_trait]
impl<T: ApiRequester + ?Sized> ApiRequester for Arc<T> {
    async fn request(&self, path: &str, kind: TokenKind) -> Result<RawResponse> {
        (**self).request(path, kind).await
    }
}

#[async_trait]
impl<T: ApiRequester + ?Sized> ApiRequester for &T {
    async fn request(&self, path: &str, kind: TokenKind) -> Result<RawResponse> {
        (**self).request(path, kind).await
    }
}

/// `reqwest`-backed requester.
#[derive(Debug, Clone)]
pub struct HttpRequester {
    config: ClientConfig,
    client: reqwest::Client,
}

impl HttpRequester {
    /// Create a requester with a client built from the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Transport` if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;

        Ok(Self { config, client })
    }

    /// Create a requester with a custom reqwest client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self { config, client }
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the `Authorization` header for a token kind.
    fn auth_header(&self, kind: TokenKind) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Api-Token {}", self.config.token_for(kind)))
            .map_err(|_| ClientError::Config(format!("{kind} token is not a valid header value")))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

#[async_trait]
impl ApiRequester for HttpRequester {
    async fn request(&self, path: &str, kind: TokenKind) -> Result<RawResponse> {
        let url = self.config.url_for(path);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, self.auth_header(kind)?)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;

        tracing::trace!(url = %url, status, bytes = body.len(), "Received API response");

        Ok(RawResponse::new(status, body.to_vec()))
    }
}
