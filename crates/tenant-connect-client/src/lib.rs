//! Tenant connection info resolution for monitoring agents.
//!
//! This crate fetches a tenant's identity, token and endpoint list from a
//! deployment API and selects the endpoint an agent should report to:
//!
//! - HTTP requests behind the [`ApiRequester`] trait, with a `reqwest` implementation
//! - Error body decoding for non-2xx responses
//! - Structured resolution events through a [`ResolverObserver`]
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌────────────────────┐
//! │   Caller         │────▶│ TenantInfoResolver │──── events ───▶ ResolverObserver
//! │   (installer)    │     └─────────┬──────────┘
//! └──────────────────┘               │
//!                          ┌─────────▼──────────┐
//!                          │   ApiRequester     │
//!                          │   (HttpRequester)  │
//!                          └─────────┬──────────┘
//!                                    │ HTTPS
//!                          ┌─────────▼──────────┐
//!                          │  connectioninfo    │
//!                          │  endpoint          │
//!                          └────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use tenant_connect_client::{ClientConfig, HttpRequester, TenantInfoResolver};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::new("https://abc123.live.example.com/api", "api-token")
//!     .with_paas_token("paas-token");
//!
//! let resolver = TenantInfoResolver::new(HttpRequester::new(config)?);
//! let tenant = resolver.fetch().await?;
//!
//! println!("Tenant: {}", tenant.id());
//! println!("Communication endpoint: {}", tenant.communication_endpoint());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod api_error;
pub mod config;
pub mod error;
pub mod observer;
pub mod requester;
pub mod resolver;

pub use api_error::decode_error;
pub use config::ClientConfig;
pub use error::{BoxError, ClientError, Result};
pub use observer::{ResolverEvent, ResolverObserver, TracingObserver};
pub use requester::{ApiRequester, HttpRequester, RawResponse, TokenKind};
pub use resolver::{TenantInfoResolver, CONNECTION_INFO_PATH};
pub use tenant_connect_core::TenantDescriptor;

#[cfg(any(test, feature = "test-utils"))]
pub use observer::RecordingObserver;
