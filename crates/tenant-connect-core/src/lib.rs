//! Core types for tenant connection resolution.
//!
//! This crate provides the pieces of tenant resolution that involve no I/O:
//!
//! - **Tenant descriptor**: the tenant's identity, token and endpoints
//! - **Endpoint selection**: picking the single communication endpoint a
//!   monitoring agent should report to
//!
//! # Example
//!
//! ```
//! use tenant_connect_core::TenantDescriptor;
//!
//! let tenant = TenantDescriptor::new(
//!     "abc123",
//!     "tenant-token",
//!     vec![
//!         "https://x.example.com/e/abc123".to_string(),
//!         "https://y.example.com/e/def456".to_string(),
//!     ],
//! );
//!
//! assert_eq!(
//!     tenant.communication_endpoint(),
//!     "https://x.example.com/e/abc123/communication"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod tenant;

pub use tenant::{
    communication_endpoint_index, normalize_communication_endpoint,
    select_communication_endpoint, TenantDescriptor, COMMUNICATION_SUFFIX, PATH_SEPARATOR,
};
