//! Error types for the registry.
//!
//! Errors serialize so they can travel as revert data through the forwarder
//! and be decoded by the original caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by registry operations.
///
/// Every failure aborts the whole operation; no partial writes survive.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryError {
    /// The acting identity lacks the role the operation requires.
    #[error("caller is not authorized for this operation")]
    Unauthorized,

    /// The zero address cannot be granted a role.
    #[error("invalid identity: zero address")]
    InvalidIdentity,

    /// The identity is already a member of the publisher set.
    #[error("publisher already registered")]
    AlreadyRegistered,

    /// The content hash is empty.
    #[error("content hash must not be empty")]
    EmptyHash,

    /// A record already exists for this content hash.
    #[error("content hash already registered")]
    DuplicateHash,

    /// No record exists for this content hash.
    #[error("content not found")]
    NotFound,

    /// The call payload could not be decoded.
    #[error("malformed call payload")]
    MalformedCall,
}
