//! # Structured-Data Hashing
//!
//! EIP-712-style domain-separated digests. The digest a signer authenticates
//! commits to every request field in fixed order and to the deployment it is
//! meant for (forwarder name, version, chain id and the forwarder's own
//! address), so a signature can never be replayed against another deployment
//! or another network.

use crate::domain::request::ForwardRequest;
use shared_crypto::{keccak256, keccak256_concat};
use shared_types::{Address, Hash, U256};

/// Type string committing to the request's field names and their order.
pub const FORWARD_REQUEST_TYPE: &str =
    "ForwardRequest(address from,address to,uint256 value,uint256 gas,uint256 nonce,bytes data)";

/// Type string for the domain separator fields.
pub const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

// =============================================================================
// SIGNING DOMAIN
// =============================================================================

/// The deployment parameters signatures are bound to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningDomain {
    /// Human-readable name of the forwarder deployment.
    pub name: String,
    /// Fixed version string of the signing scheme.
    pub version: String,
    /// Network identifier of the execution environment.
    pub chain_id: u64,
    /// The forwarder's own address.
    pub verifying_contract: Address,
}

impl SigningDomain {
    /// Computes the domain separator over all four deployment parameters.
    #[must_use]
    pub fn separator(&self) -> Hash {
        keccak256_concat(&[
            keccak256(DOMAIN_TYPE.as_bytes()).as_bytes(),
            keccak256(self.name.as_bytes()).as_bytes(),
            keccak256(self.version.as_bytes()).as_bytes(),
            &encode_u64(self.chain_id),
            &encode_address(&self.verifying_contract),
        ])
    }
}

// =============================================================================
// HASHING
// =============================================================================

/// Hashes a request's fields in fixed order under [`FORWARD_REQUEST_TYPE`].
///
/// Dynamic-length `data` enters as its keccak-256 hash; all other fields are
/// encoded as 32-byte big-endian words.
#[must_use]
pub fn struct_hash(request: &ForwardRequest) -> Hash {
    keccak256_concat(&[
        keccak256(FORWARD_REQUEST_TYPE.as_bytes()).as_bytes(),
        &encode_address(&request.from),
        &encode_address(&request.to),
        &encode_u256(&request.value),
        &encode_u64(request.gas),
        &encode_u64(request.nonce),
        keccak256(request.data.as_slice()).as_bytes(),
    ])
}

/// The digest a signer authenticates: `keccak256(0x19 || 0x01 || separator ||
/// struct_hash)`.
#[must_use]
pub fn request_digest(separator: &Hash, request: &ForwardRequest) -> Hash {
    keccak256_concat(&[
        &[0x19, 0x01],
        separator.as_bytes(),
        struct_hash(request).as_bytes(),
    ])
}

// =============================================================================
// WORD ENCODING
// =============================================================================

/// Left-pads an address to a 32-byte word.
fn encode_address(address: &Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(address.as_bytes());
    word
}

/// Encodes a u64 as a 32-byte big-endian word.
fn encode_u64(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

/// Encodes a U256 as a 32-byte big-endian word.
fn encode_u256(value: &U256) -> [u8; 32] {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    word
}

// =============================================================================
// TESTS
// =============================================================================
