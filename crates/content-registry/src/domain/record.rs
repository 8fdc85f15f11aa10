//! # Content Record
//!
//! The value stored per content hash. Records are write-once: the registry
//! constructs one at registration and exposes no mutation API afterwards,
//! not even internally.

use serde::{Deserialize, Serialize};
use shared_types::Address;

/// An immutable content record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Resolved identity that registered the content.
    pub publisher: Address,
    /// Content title.
    pub title: String,
    /// Content description.
    pub description: String,
    /// Unix timestamp (seconds) at registration time.
    pub created_at: u64,
}
