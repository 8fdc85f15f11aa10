//! # Wire Codec
//!
//! The registry's raw-call surface: calls, responses and bubbled errors are
//! `bincode`-encoded. Decoding tolerates trailing bytes, so a suffix appended
//! by an untrusted caller is ignored rather than misinterpreted — identity
//! resolution already decided whose suffix counts.

use crate::domain::record::ContentRecord;
use crate::errors::RegistryError;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Bytes};

// =============================================================================
// CALLS & RESPONSES
// =============================================================================

/// An encoded call into the registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryCall {
    /// Grant publisher membership (owner-only).
    AddPublisher {
        /// Identity to grant membership to.
        publisher: Address,
    },
    /// Create a content record (publisher-only).
    RegisterContent {
        /// Globally unique content hash.
        hash: String,
        /// Content title.
        title: String,
        /// Content description.
        description: String,
    },
    /// Enumerate all content hashes in registration order.
    GetAllHashes,
    /// Read one content record.
    GetContentData {
        /// Content hash to look up.
        hash: String,
    },
}

/// The successful result of a [`RegistryCall`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryResponse {
    /// The mutation was applied.
    Ack,
    /// All content hashes in registration order.
    Hashes(Vec<String>),
    /// One content record.
    Content(ContentRecord),
}

// =============================================================================
// CODEC
// =============================================================================

/// Encodes a call for the registry's raw-call surface.
#[must_use]
pub fn encode_call(call: &RegistryCall) -> Bytes {
    Bytes::from_vec(bincode::serialize(call).expect("registry wire types serialize infallibly"))
}

/// Decodes the effective payload of an inbound call.
pub fn decode_call(payload: &[u8]) -> Result<RegistryCall, RegistryError> {
    bincode::deserialize(payload).map_err(|_| RegistryError::MalformedCall)
}

/// Encodes a successful response as return data.
#[must_use]
pub fn encode_response(response: &RegistryResponse) -> Bytes {
    Bytes::from_vec(bincode::serialize(response).expect("registry wire types serialize infallibly"))
}

/// Decodes return data into a response. `None` if it is not one.
#[must_use]
pub fn decode_response(output: &[u8]) -> Option<RegistryResponse> {
    bincode::deserialize(output).ok()
}

/// Encodes an error as revert data.
#[must_use]
pub fn encode_error(error: &RegistryError) -> Bytes {
    Bytes::from_vec(bincode::serialize(error).expect("registry wire types serialize infallibly"))
}

/// Decodes revert data into an error. `None` if it is not one.
#[must_use]
pub fn decode_error(output: &[u8]) -> Option<RegistryError> {
    bincode::deserialize(output).ok()
}

// =============================================================================
// TESTS
// =============================================================================
