//! # Content Registry
//!
//! A keyed store of immutable content records behind an owner-controlled
//! authorization gate. Write access requires membership in the publisher set;
//! each record's content hash is globally unique and registration order is
//! preserved for enumeration.
//!
//! ## Domain Invariants
//!
//! - The acting identity is resolved exactly once per inbound call
//!   (`domain::identity`) and threaded into every authorization check.
//! - A record, once created, is never mutated or destroyed; no update or
//!   delete path exists, even internally.
//! - Publisher membership, once granted, has no removal path.
//! - The owner is fixed at construction; there is no transfer or renounce.
//!
//! ## Usage Example
//!
//! ```ignore
//! use content_registry::prelude::*;
//!
//! let mut registry = AccessGatedRegistry::new(owner, Some(forwarder_address));
//! registry.add_publisher(&CallOrigin::Direct(owner), publisher)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;
pub mod wire;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::adapters::{FixedClock, SystemClock};
    pub use crate::domain::identity::{resolve_origin, CallOrigin};
    pub use crate::domain::record::ContentRecord;
    pub use crate::errors::RegistryError;
    pub use crate::events::{ContentRegistered, PublisherAdded, RegistryEvent};
    pub use crate::ports::Clock;
    pub use crate::service::AccessGatedRegistry;
    pub use crate::wire::{RegistryCall, RegistryResponse};
}

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
