//! # Relay Forwarder
//!
//! Authenticates signed, structured forward requests and performs each
//! requested call exactly once, appending the authenticated signer's address
//! to the outbound payload so the callee can recover the true actor.
//!
//! ## Domain Invariants
//!
//! - A request is attributable to `from` only after its signature verifies
//!   against the domain-separated digest (`domain::typed_data`).
//! - A signer's counter starts at 0, advances by exactly 1 per executed
//!   request and never moves backwards (`service.rs`).
//! - The counter advances before the outbound call is dispatched; a failed
//!   execution discards every effect, counter advance included.
//! - Nonces match exactly: no gap tolerance, no queuing of future nonces.
//!
//! ## Usage Example
//!
//! ```ignore
//! use relay_forwarder::prelude::*;
//!
//! let mut forwarder = RequestForwarder::new(domain);
//! let digest = forwarder.request_digest(&request);
//! // ... signer signs `digest` out of band ...
//! let output = forwarder.execute(&request, &signature, &mut dispatcher)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod errors;
pub mod events;
pub mod service;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::domain::request::ForwardRequest;
    pub use crate::domain::typed_data::SigningDomain;
    pub use crate::errors::ForwarderError;
    pub use crate::events::MetaExecuted;
    pub use crate::service::RequestForwarder;
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
