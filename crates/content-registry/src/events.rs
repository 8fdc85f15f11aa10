//! Observable events emitted by the registry.

use serde::{Deserialize, Serialize};
use shared_types::Address;

/// Emitted when the owner grants publisher membership.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublisherAdded {
    /// The identity granted membership.
    pub publisher: Address,
}

/// Emitted when a content record is created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRegistered {
    /// The record's content hash.
    pub hash: String,
    /// Resolved identity that registered the content.
    pub publisher: Address,
    /// Content title.
    pub title: String,
    /// Content description.
    pub description: String,
    /// Unix timestamp (seconds) at registration time.
    pub created_at: u64,
}

/// Any event the registry emits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    /// Publisher membership granted.
    PublisherAdded(PublisherAdded),
    /// Content record created.
    ContentRegistered(ContentRegistered),
}
