//! Tenant connection info resolution.
//!
//! One request, one decode, one endpoint selection. Failures are returned to
//! the caller as they happen; nothing is retried.

use serde::Deserialize;
use tenant_connect_core::TenantDescriptor;

use crate::api_error::decode_error;
use crate::error::{ClientError, Result};
use crate::observer::{ResolverEvent, ResolverObserver, TracingObserver};
use crate::requester::{ApiRequester, TokenKind};

/// Path of the tenant connection info endpoint, relative to the API base URL.
pub const CONNECTION_INFO_PATH: &str = "/v1/deployment/installer/agent/connectioninfo";

/// Wire format of the connection info response.
///
/// Missing or `null` fields decode to empty values.
#[derive(Debug, Deserialize)]
struct ConnectionInfoResponse {
    #[serde(rename = "TenantUUID")]
    tenant_uuid: Option<String>,
    #[serde(rename = "TenantToken")]
    tenant_token: Option<String>,
    #[serde(rename = "CommunicationEndpoints")]
    communication_endpoints: Option<Vec<String>>,
}

impl From<ConnectionInfoResponse> for TenantDescriptor {
    fn from(raw: ConnectionInfoResponse) -> Self {
        Self::new(
            raw.tenant_uuid.unwrap_or_default(),
            raw.tenant_token.unwrap_or_default(),
            raw.communication_endpoints.unwrap_or_default(),
        )
    }
}

/// Resolves a tenant's identity, token and communication endpoint.
///
/// Holds no mutable state: share it behind an `Arc` to serve concurrent callers.
pub struct TenantInfoResolver<R, O = TracingObserver> {
    requester: R,
    observer: O,
}

impl<R: ApiRequester> TenantInfoResolver<R> {
    /// Create a resolver that reports events through `tracing`.
    #[must_use]
    pub const fn new(requester: R) -> Self {
        Self {
            requester,
            observer: TracingObserver,
        }
    }
}

impl<R: ApiRequester, O: ResolverObserver> TenantInfoResolver<R, O> {
    /// Create a resolver with a custom observer.
    #[must_use]
    pub const fn with_observer(requester: R, observer: O) -> Self {
        Self {
            requester,
            observer,
        }
    }

    /// Get the observer receiving this resolver's events.
    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    /// Fetch the tenant connection info and select the communication endpoint.
    ///
    /// A tenant without endpoints is not an error; its descriptor has an empty
    /// communication endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request cannot be completed (`Transport`, passed through unchanged)
    /// - The server answers with a non-2xx status (`Api`)
    /// - The response body is not valid tenant info JSON (`Decode`)
    pub async fn fetch(&self) -> Result<TenantDescriptor> {
        let response = match self
            .requester
            .request(CONNECTION_INFO_PATH, TokenKind::PaaS)
            .await
        {
            Ok(response) => response,
            Err(err) => {
                self.observer.emit(ResolverEvent::RequestFailed {
                    path: CONNECTION_INFO_PATH.to_string(),
                    error: err.to_string(),
                });
                return Err(err);
            }
        };

        if !response.is_success() {
            let err = decode_error(&response.body, response.status);
            if let ClientError::Api { status, message } = &err {
                self.observer.emit(ResolverEvent::ApiRejected {
                    status: *status,
                    message: message.clone(),
                });
            }
            return Err(err);
        }

        let tenant = match parse_connection_info(&response.body) {
            Ok(tenant) => tenant,
            Err(err) => {
                self.observer.emit(ResolverEvent::DecodeFailed {
                    error: err.to_string(),
                });
                return Err(err);
            }
        };

        if tenant.endpoints().is_empty() {
            self.observer.emit(ResolverEvent::NoEndpoints {
                tenant_id: tenant.id().to_string(),
            });
        }

        self.observer.emit(ResolverEvent::Resolved {
            tenant_id: tenant.id().to_string(),
            communication_endpoint: tenant.communication_endpoint().to_string(),
        });

        Ok(tenant)
    }
}

/// Decode a connection info body into a descriptor.
fn parse_connection_info(body: &[u8]) -> Result<TenantDescriptor> {
    let raw: ConnectionInfoResponse = serde_json::from_slice(body)?;
    Ok(raw.into())
}
