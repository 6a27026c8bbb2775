//! Tenant descriptor and communication endpoint selection.
//!
//! The communication endpoint is derived from the tenant ID and the
//! server-provided endpoint list. Matching is a plain substring check on the
//! URL text: no case folding and no URL parsing.

use std::fmt;

use serde::Serialize;

/// Path segment every communication endpoint ends with.
pub const COMMUNICATION_SUFFIX: &str = "communication";

/// Separator inserted before [`COMMUNICATION_SUFFIX`] when missing.
pub const PATH_SEPARATOR: &str = "/";

/// Connection metadata for a single tenant.
///
/// Created once per resolution. The communication endpoint is computed from
/// `id` and `endpoints` at construction and cannot be changed afterwards.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct TenantDescriptor {
    id: String,
    token: String,
    endpoints: Vec<String>,
    communication_endpoint: String,
}

impl TenantDescriptor {
    /// Build a descriptor and select its communication endpoint.
    #[must_use]
    pub fn new(id: impl Into<String>, token: impl Into<String>, endpoints: Vec<String>) -> Self {
        let id = id.into();
        let communication_endpoint = select_communication_endpoint(&id, &endpoints);

        Self {
            id,
            token: token.into(),
            endpoints,
            communication_endpoint,
        }
    }

    /// The opaque tenant identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The tenant token used for subsequent calls.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Candidate endpoints in server-provided order.
    #[must_use]
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    /// The selected communication endpoint, or `""` when there are no endpoints.
    #[must_use]
    pub fn communication_endpoint(&self) -> &str {
        &self.communication_endpoint
    }

    /// Whether a communication endpoint could be selected.
    #[must_use]
    pub fn has_communication_endpoint(&self) -> bool {
        !self.communication_endpoint.is_empty()
    }
}

impl fmt::Debug for TenantDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TenantDescriptor")
            .field("id", &self.id)
            .field("token", &"<redacted>")
            .field("endpoints", &self.endpoints)
            .field("communication_endpoint", &self.communication_endpoint)
            .finish()
    }
}

/// Select the communication endpoint for a tenant.
///
/// The first endpoint containing `id` wins; otherwise the first endpoint is
/// used. The result is normalized with [`normalize_communication_endpoint`].
/// Returns an empty string when `endpoints` is empty.
#[must_use]
pub fn select_communication_endpoint(id: &str, endpoints: &[String]) -> String {
    communication_endpoint_index(id, endpoints)
        .map(|index| normalize_communication_endpoint(&endpoints[index]))
        .unwrap_or_default()
}

/// Index of the endpoint to use for communication.
///
/// `None` only when `endpoints` is empty.
#[must_use]
pub fn communication_endpoint_index(id: &str, endpoints: &[String]) -> Option<usize> {
    if endpoints.is_empty() {
        return None;
    }

    let index = endpoints
        .iter()
        .position(|endpoint| endpoint.contains(id))
        .unwrap_or(0);
    Some(index)
}

/// Ensure `endpoint` ends with the communication path suffix.
///
/// Idempotent: an endpoint that already ends with [`COMMUNICATION_SUFFIX`] is
/// returned unchanged.
#[must_use]
pub fn normalize_communication_endpoint(endpoint: &str) -> String {
    if endpoint.ends_with(COMMUNICATION_SUFFIX) {
        return endpoint.to_string();
    }

    let mut normalized = endpoint.to_string();
    if !normalized.ends_with(PATH_SEPARATOR) {
        normalized.push_str(PATH_SEPARATOR);
    }
    normalized.push_str(COMMUNICATION_SUFFIX);
    normalized
}
