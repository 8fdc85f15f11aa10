//! # Identity Spoofing
//!
//! The appended-identity mechanism only means something when the registry's
//! immediate caller is the trusted forwarder; everyone else acts as
//! themselves. These simulations try to impersonate other identities from
//! both sides of that line.

#[cfg(test)]
mod tests {
    use crate::support::{
        register_content_request, sign, TestBed, CLOCK_TIME, FORWARDER_ADDRESS, REGISTRY_ADDRESS,
    };
    use content_registry::prelude::*;
    use content_registry::wire;
    use relay_forwarder::prelude::ForwarderError;
    use shared_crypto::Keypair;
    use shared_types::{Address, Bytes, CallRequest, Callee, U256};

    fn raw_register(hash: &str) -> Vec<u8> {
        wire::encode_call(&RegistryCall::RegisterContent {
            hash: hash.to_string(),
            title: "T".to_string(),
            description: "D".to_string(),
        })
        .into_vec()
    }

    fn raw_call(caller: Address, input: Vec<u8>) -> CallRequest {
        CallRequest {
            caller,
            to: REGISTRY_ADDRESS,
            value: U256::zero(),
            gas_limit: 1_000_000,
            input: Bytes::from_vec(input),
        }
    }

    /// A direct caller appending a victim's address bytes acts as itself;
    /// the suffix is plain payload, not an identity.
    #[test]
    fn test_direct_caller_cannot_borrow_an_identity() {
        let bed = TestBed::new();
        let attacker = Address::new([0xA7; 20]);
        let victim = Address::new([0x51; 20]);
        bed.authorize_publisher(attacker);
        bed.authorize_publisher(victim);

        let mut input = raw_register("h1");
        input.extend_from_slice(victim.as_bytes());

        let outcome = bed.registry.borrow_mut().call(raw_call(attacker, input));
        assert!(outcome.success);
        assert_eq!(
            bed.registry.borrow().get_content_data("h1").unwrap().publisher,
            attacker
        );
    }

    /// An unauthorized direct caller gains nothing from a forged suffix.
    #[test]
    fn test_forged_suffix_does_not_bypass_the_gate() {
        let bed = TestBed::new();
        let attacker = Address::new([0xA7; 20]);
        let victim = Address::new([0x51; 20]);
        bed.authorize_publisher(victim);

        let mut input = raw_register("h1");
        input.extend_from_slice(victim.as_bytes());

        let outcome = bed.registry.borrow_mut().call(raw_call(attacker, input));
        assert!(!outcome.success);
        assert_eq!(
            wire::decode_error(outcome.output.as_slice()),
            Some(RegistryError::Unauthorized)
        );
        assert_eq!(bed.registry.borrow().content_count(), 0);
    }

    /// With no trusted forwarder configured, nobody's suffix counts — not
    /// even one arriving from a forwarder's address.
    #[test]
    fn test_direct_only_deployment_trusts_nobody() {
        let owner = Keypair::generate();
        let mut registry = AccessGatedRegistry::with_clock(
            owner.address(),
            None,
            Box::new(FixedClock(CLOCK_TIME)),
        );
        let victim = Address::new([0x51; 20]);
        registry
            .add_publisher(&CallOrigin::Direct(owner.address()), victim)
            .unwrap();

        let mut input = raw_register("h1");
        input.extend_from_slice(victim.as_bytes());

        let outcome = registry.call(raw_call(FORWARDER_ADDRESS, input));
        assert!(!outcome.success);
        assert_eq!(
            wire::decode_error(outcome.output.as_slice()),
            Some(RegistryError::Unauthorized)
        );
    }

    /// The forwarder never signs off on an identity it did not recover: a
    /// request claiming a victim as `from` fails against the real signature.
    #[test]
    fn test_claimed_sender_must_match_recovered_signer() {
        let mut bed = TestBed::new();
        let attacker = Keypair::generate();
        let victim = Keypair::generate();
        bed.authorize_publisher(victim.address());

        let request = register_content_request(victim.address(), 0, "h1", "T", "D");
        let signature = sign(&bed.forwarder, &attacker, &request);

        assert!(!bed.forwarder.verify(&request, &signature));
        assert_eq!(
            bed.execute(&request, &signature).unwrap_err(),
            ForwarderError::AuthenticationFailed
        );
        assert_eq!(bed.registry.borrow().content_count(), 0);
    }

    /// A forwarder call too short to carry an identity suffix degrades to a
    /// direct call from the forwarder itself, which then fails on payload
    /// decoding; no identity is invented.
    #[test]
    fn test_short_forwarder_input_cannot_smuggle_identity() {
        let bed = TestBed::new();

        let outcome = bed
            .registry
            .borrow_mut()
            .call(raw_call(FORWARDER_ADDRESS, vec![0x01, 0x02, 0x03]));
        assert!(!outcome.success);
        assert_eq!(
            wire::decode_error(outcome.output.as_slice()),
            Some(RegistryError::MalformedCall)
        );
    }

    /// Exactly address-width input from the forwarder resolves the suffix as
    /// the actor and leaves an empty payload, which decodes to nothing.
    #[test]
    fn test_suffix_only_input_carries_no_call() {
        let bed = TestBed::new();
        let victim = Address::new([0x51; 20]);
        bed.authorize_publisher(victim);

        let outcome = bed
            .registry
            .borrow_mut()
            .call(raw_call(FORWARDER_ADDRESS, victim.as_bytes().to_vec()));
        assert!(!outcome.success);
        assert_eq!(
            wire::decode_error(outcome.output.as_slice()),
            Some(RegistryError::MalformedCall)
        );
        assert_eq!(bed.registry.borrow().content_count(), 0);
    }
}
