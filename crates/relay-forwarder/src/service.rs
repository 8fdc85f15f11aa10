//! # Request Forwarder Service
//!
//! Owns the per-signer nonce counters and the execution path: verify the
//! signature and nonce, advance the counter, dispatch the call with the
//! signer's address appended, and bubble any downstream failure verbatim.

use crate::domain::request::ForwardRequest;
use crate::domain::typed_data::{self, SigningDomain};
use crate::errors::ForwarderError;
use crate::events::MetaExecuted;
use shared_crypto::{recover_address, EcdsaSignature};
use shared_types::{Address, Bytes, CallDispatcher, CallRequest, Hash};
use std::collections::HashMap;
use tracing::{info, warn};

/// The request-forwarding component.
///
/// Mutating operations take `&mut self`: execution is one complete operation
/// at a time, and a failing operation leaves no effects behind.
pub struct RequestForwarder {
    domain: SigningDomain,
    domain_separator: Hash,
    nonces: HashMap<Address, u64>,
    events: Vec<MetaExecuted>,
}

impl RequestForwarder {
    /// Creates a forwarder for the given signing domain.
    ///
    /// The domain separator is fixed for the lifetime of the component; it is
    /// computed once here.
    #[must_use]
    pub fn new(domain: SigningDomain) -> Self {
        let domain_separator = domain.separator();
        Self {
            domain,
            domain_separator,
            nonces: HashMap::new(),
            events: Vec::new(),
        }
    }

    /// The forwarder's own address (the domain's verifying contract).
    #[must_use]
    pub fn address(&self) -> Address {
        self.domain.verifying_contract
    }

    /// The cached domain separator.
    #[must_use]
    pub fn domain_separator(&self) -> Hash {
        self.domain_separator
    }

    /// Current counter for `signer`; 0 if the signer never executed.
    #[must_use]
    pub fn get_nonce(&self, signer: Address) -> u64 {
        self.nonces.get(&signer).copied().unwrap_or(0)
    }

    /// The exact digest a signer must sign for `request` to verify here.
    #[must_use]
    pub fn request_digest(&self, request: &ForwardRequest) -> Hash {
        typed_data::request_digest(&self.domain_separator, request)
    }

    /// Checks a request's signature and nonce. Side-effect-free.
    ///
    /// True iff the address recovered from `signature` over the request
    /// digest equals `request.from` AND `request.nonce` equals the signer's
    /// current counter. Malformed signatures verify false.
    #[must_use]
    pub fn verify(&self, request: &ForwardRequest, signature: &EcdsaSignature) -> bool {
        let digest = self.request_digest(request);
        match recover_address(&digest, signature) {
            Ok(signer) => signer == request.from && request.nonce == self.get_nonce(request.from),
            Err(_) => false,
        }
    }

    /// Authenticates `request` and performs the forwarded call.
    ///
    /// The outbound payload is `request.data` with the signer's 20 address
    /// bytes appended, dispatched against `request.to` under the request's
    /// `value` and `gas` ceilings. Returns the callee's output on success.
    pub fn execute(
        &mut self,
        request: &ForwardRequest,
        signature: &EcdsaSignature,
        dispatcher: &mut dyn CallDispatcher,
    ) -> Result<Bytes, ForwarderError> {
        if !self.verify(request, signature) {
            warn!(from = %request.from, nonce = request.nonce, "rejected forward request");
            return Err(ForwarderError::AuthenticationFailed);
        }

        // Counter advances before the call goes out; a reentrant request
        // carrying the same nonce must fail verification.
        let current = self.get_nonce(request.from);
        self.nonces.insert(request.from, current + 1);

        let mut input = request.data.clone().into_vec();
        input.extend_from_slice(request.from.as_bytes());

        let outcome = dispatcher.dispatch(CallRequest {
            caller: self.domain.verifying_contract,
            to: request.to,
            value: request.value,
            gas_limit: request.gas,
            input: Bytes::from_vec(input),
        });

        if !outcome.success {
            // A failed operation leaves no effects; the counter advance is
            // discarded with it.
            self.nonces.insert(request.from, current);
            warn!(from = %request.from, to = %request.to, "forwarded call failed");
            return Err(ForwarderError::ForwardedCallFailed {
                revert_data: if outcome.output.is_empty() {
                    None
                } else {
                    Some(outcome.output)
                },
            });
        }

        info!(from = %request.from, to = %request.to, nonce = request.nonce, "request executed");
        self.events.push(MetaExecuted {
            from: request.from,
            to: request.to,
            success: true,
            output: outcome.output.clone(),
        });

        Ok(outcome.output)
    }

    /// Events emitted so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[MetaExecuted] {
        &self.events
    }
}

// =============================================================================
// TESTS
// =============================================================================
