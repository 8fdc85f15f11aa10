//! # Acting-Identity Resolution
//!
//! Who is really asking. A call arriving from the configured trusted
//! forwarder carries the authenticated signer's address as the last 20 bytes
//! of its payload; every other call acts as its immediate caller. Resolution
//! happens once per inbound call and the result is threaded into every
//! authorization check.

use shared_types::Address;

/// The resolved actor of an inbound call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallOrigin {
    /// The immediate caller acts for itself.
    Direct(Address),
    /// The trusted forwarder acts for an authenticated signer.
    Forwarded {
        /// Signer address recovered from the payload suffix.
        from: Address,
    },
}

impl CallOrigin {
    /// The acting identity, regardless of how the call arrived.
    #[must_use]
    pub fn sender(&self) -> Address {
        match self {
            Self::Direct(caller) => *caller,
            Self::Forwarded { from } => *from,
        }
    }
}

/// Resolves the acting identity and the effective payload of an inbound call.
///
/// When `caller` is the trusted forwarder and `input` is at least one
/// address wide, the last 20 bytes are the acting identity and the effective
/// payload is the prefix with them stripped. In every other case the acting
/// identity is `caller` and the payload is used unmodified — appended bytes
/// from an untrusted caller are just payload.
#[must_use]
pub fn resolve_origin(
    trusted_forwarder: Option<Address>,
    caller: Address,
    input: &[u8],
) -> (CallOrigin, &[u8]) {
    match trusted_forwarder {
        Some(forwarder) if caller == forwarder && input.len() >= Address::LEN => {
            let (payload, suffix) = input.split_at(input.len() - Address::LEN);
            let mut from = [0u8; 20];
            from.copy_from_slice(suffix);
            (
                CallOrigin::Forwarded {
                    from: Address::new(from),
                },
                payload,
            )
        }
        _ => (CallOrigin::Direct(caller), input),
    }
}

// =============================================================================
// TESTS
// =============================================================================
