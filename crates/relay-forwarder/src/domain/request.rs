//! # Forward Request
//!
//! The signed unit of work: who acts, what is called, and the sequencing
//! nonce that makes the request single-use.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Bytes, U256};

/// A structured request to perform one call on behalf of `from`.
///
/// Ephemeral: constructed and signed off-process, submitted by a relayer,
/// never persisted. `value` and `gas` are opaque pass-through parameters for
/// the downstream call; the forwarder does no accounting of its own on them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardRequest {
    /// Claimed signer. Authenticated by signature recovery before use.
    pub from: Address,
    /// Call target.
    pub to: Address,
    /// Opaque amount forwarded with the call.
    pub value: U256,
    /// Execution-cost ceiling forwarded with the call.
    pub gas: u64,
    /// Must equal the signer's current counter exactly.
    pub nonce: u64,
    /// Encoded call for the target.
    pub data: Bytes,
}
