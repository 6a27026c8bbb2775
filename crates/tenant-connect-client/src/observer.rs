//! Structured events emitted while resolving tenant info.
//!
//! The resolver never logs directly. It reports [`ResolverEvent`]s to a
//! [`ResolverObserver`], which by default forwards them to `tracing`.

/// Something observable that happened during a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverEvent {
    /// The requester failed before a response was received.
    RequestFailed {
        /// Request path.
        path: String,
        /// Rendered error.
        error: String,
    },
    /// The server answered with an error status.
    ApiRejected {
        /// HTTP status code.
        status: u16,
        /// Message decoded from the error body.
        message: String,
    },
    /// The success body could not be decoded.
    DecodeFailed {
        /// Rendered decode error.
        error: String,
    },
    /// The tenant has no endpoints; resolution continues.
    NoEndpoints {
        /// Tenant identifier.
        tenant_id: String,
    },
    /// Resolution completed.
    Resolved {
        /// Tenant identifier.
        tenant_id: String,
        /// Selected communication endpoint, possibly empty.
        communication_endpoint: String,
    },
}

/// Receiver for resolver events.
pub trait ResolverObserver: Send + Sync {
    /// Record an event.
    fn emit(&self, event: ResolverEvent);
}

/// Observer that forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ResolverObserver for TracingObserver {
    fn emit(&self, event: ResolverEvent) {
        match event {
            ResolverEvent::RequestFailed { path, error } => {
                tracing::error!(path = %path, error = %error, "Tenant info request failed");
            }
            ResolverEvent::ApiRejected { status, message } => {
                tracing::error!(status, message = %message, "Server rejected tenant info request");
            }
            ResolverEvent::DecodeFailed { error } => {
                tracing::error!(error = %error, "Failed to decode tenant info response");
            }
            ResolverEvent::NoEndpoints { tenant_id } => {
                tracing::info!(tenant_id = %tenant_id, "Tenant has no endpoints");
            }
            ResolverEvent::Resolved {
                tenant_id,
                communication_endpoint,
            } => {
                tracing::debug!(
                    tenant_id = %tenant_id,
                    communication_endpoint = %communication_endpoint,
                    "Resolved tenant info"
                );
            }
        }
    }
}

/// Observer that keeps every event in memory.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: parking_lot::Mutex<Vec<ResolverEvent>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl RecordingObserver {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<ResolverEvent> {
        self.events.lock().clone()
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl ResolverObserver for RecordingObserver {
    fn emit(&self, event: ResolverEvent) {
        self.events.lock().push(event);
    }
}

impl<T: ResolverObserver + ?Sized> ResolverObserver for std::sync::Arc<T> {
    fn emit(&self, event: ResolverEvent) {
        (**self).emit(event);
    }
}
