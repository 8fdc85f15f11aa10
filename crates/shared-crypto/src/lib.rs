//! # Shared Crypto
//!
//! Cryptographic primitives for request authentication.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | Keccak-256 | Structured-data digests, address derivation |
//! | `ecdsa` | secp256k1 | Request signing and signer recovery |
//!
//! ## Security Properties
//!
//! - **secp256k1**: RFC 6979 deterministic nonces, low-S normalization (EIP-2)
//! - **Recovery**: the signer's address is recovered from `(digest, signature)`
//!   alone; no public-key registry is required
//! - **Constant-time scalar checks** via the `subtle` crate

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;

pub use ecdsa::{recover_address, EcdsaSignature, Keypair};
pub use errors::CryptoError;
pub use hashing::{keccak256, keccak256_concat};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
