//! # Keccak-256 Hashing
//!
//! One-shot and multi-part keccak-256, the digest algorithm used for
//! structured-data hashing and address derivation throughout the workspace.

use sha3::{Digest, Keccak256};
use shared_types::Hash;

/// Hashes `data` with keccak-256 (one-shot).
#[must_use]
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    Hash::new(out)
}

/// Hashes the concatenation of `parts` without materializing it.
#[must_use]
pub fn keccak256_concat(parts: &[&[u8]]) -> Hash {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    Hash::new(out)
}
