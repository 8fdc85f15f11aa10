//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Signature component out of range or structurally invalid.
    #[error("invalid signature format")]
    InvalidSignature,

    /// S component in the upper half of the curve order (EIP-2).
    #[error("malleable signature: S value too high")]
    MalleableSignature,

    /// Recovery id is not one of 0, 1, 27, 28.
    #[error("invalid recovery id: {0}")]
    InvalidRecoveryId(u8),

    /// Public key recovery failed for the given digest and signature.
    #[error("public key recovery failed")]
    RecoveryFailed,

    /// Secret key bytes do not form a valid scalar.
    #[error("invalid private key")]
    InvalidPrivateKey,
}
