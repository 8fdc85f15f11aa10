//! Error types for request forwarding.

use shared_types::Bytes;
use thiserror::Error;

/// Errors surfaced by the forwarder's operations.
///
/// Every failure aborts the whole operation; no effects survive it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForwarderError {
    /// Signature does not match the claimed signer, or the nonce is not the
    /// signer's current counter.
    #[error("request authentication failed: signer mismatch or stale nonce")]
    AuthenticationFailed,

    /// The dispatched call failed. Carries the callee's revert data verbatim
    /// when it produced any, `None` otherwise.
    #[error("forwarded call failed")]
    ForwardedCallFailed {
        /// Revert data returned by the callee, if any.
        revert_data: Option<Bytes>,
    },
}
