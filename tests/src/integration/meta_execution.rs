//! # Meta-Execution Flows
//!
//! A signer constructs and signs a request, a relayer submits it, the
//! forwarder authenticates and dispatches it, and the registry sees the true
//! signer. These tests drive the full path.

#[cfg(test)]
mod tests {
    use crate::support::{
        content_hash, register_content_request, sign, TestBed, CLOCK_TIME, FORWARDER_ADDRESS,
        REGISTRY_ADDRESS,
    };
    use content_registry::prelude::*;
    use content_registry::wire;
    use relay_forwarder::prelude::*;
    use shared_crypto::Keypair;
    use shared_types::U256;

    /// Signer S with nonce 0 registers "h1" through relayer submission; the
    /// record is attributed to S, and S's counter advances to 1.
    #[test]
    fn test_signed_register_flows_through_forwarder() {
        let mut bed = TestBed::new();
        let signer = Keypair::generate();
        bed.authorize_publisher(signer.address());

        let request = register_content_request(signer.address(), 0, "h1", "T", "D");
        let signature = sign(&bed.forwarder, &signer, &request);

        let output = bed.execute(&request, &signature).unwrap();
        assert_eq!(
            wire::decode_response(output.as_slice()),
            Some(RegistryResponse::Ack)
        );

        let registry = bed.registry.borrow();
        let record = registry.get_content_data("h1").unwrap();
        assert_eq!(record.publisher, signer.address());
        assert_eq!(record.title, "T");
        assert_eq!(record.description, "D");
        assert_eq!(record.created_at, CLOCK_TIME);

        assert_eq!(bed.forwarder.get_nonce(signer.address()), 1);
        assert_eq!(bed.forwarder.events().len(), 1);
        assert_eq!(bed.forwarder.events()[0].from, signer.address());
        assert_eq!(bed.forwarder.events()[0].to, REGISTRY_ADDRESS);
    }

    /// The same (request, signature) pair submitted a second time fails and
    /// changes nothing.
    #[test]
    fn test_replay_is_rejected() {
        let mut bed = TestBed::new();
        let signer = Keypair::generate();
        bed.authorize_publisher(signer.address());

        let request = register_content_request(signer.address(), 0, "h1", "T", "D");
        let signature = sign(&bed.forwarder, &signer, &request);

        bed.execute(&request, &signature).unwrap();
        let err = bed.execute(&request, &signature).unwrap_err();

        assert_eq!(err, ForwarderError::AuthenticationFailed);
        assert_eq!(bed.forwarder.get_nonce(signer.address()), 1);
        assert_eq!(bed.registry.borrow().content_count(), 1);
    }

    /// The recorded publisher is the signer, never the forwarder (the
    /// registry's immediate caller on this path).
    #[test]
    fn test_record_never_attributes_the_forwarder() {
        let mut bed = TestBed::new();
        let signer = Keypair::generate();
        bed.authorize_publisher(signer.address());

        let hash = content_hash("identity preservation");
        let request = register_content_request(signer.address(), 0, &hash, "T", "D");
        let signature = sign(&bed.forwarder, &signer, &request);
        bed.execute(&request, &signature).unwrap();

        let registry = bed.registry.borrow();
        let record = registry.get_content_data(&hash).unwrap();
        assert_eq!(record.publisher, signer.address());
        assert_ne!(record.publisher, FORWARDER_ADDRESS);
    }

    /// Nonces execute strictly in order: a gap is rejected outright, and the
    /// sequence proceeds one at a time.
    #[test]
    fn test_nonces_execute_strictly_in_order() {
        let mut bed = TestBed::new();
        let signer = Keypair::generate();
        bed.authorize_publisher(signer.address());

        let ahead = register_content_request(signer.address(), 1, "h-ahead", "T", "D");
        let ahead_sig = sign(&bed.forwarder, &signer, &ahead);
        assert_eq!(
            bed.execute(&ahead, &ahead_sig).unwrap_err(),
            ForwarderError::AuthenticationFailed
        );

        let first = register_content_request(signer.address(), 0, "h0", "T", "D");
        let first_sig = sign(&bed.forwarder, &signer, &first);
        bed.execute(&first, &first_sig).unwrap();

        // The previously premature nonce-1 request is now current.
        bed.execute(&ahead, &ahead_sig).unwrap();
        assert_eq!(bed.forwarder.get_nonce(signer.address()), 2);
        assert_eq!(
            bed.registry.borrow().get_all_hashes(),
            &["h0".to_string(), "h-ahead".to_string()]
        );
    }

    /// The callee observes the forwarder as immediate caller and the
    /// request's value/gas ceilings and payload unchanged, with the signer's
    /// 20 bytes appended.
    #[test]
    fn test_call_fields_pass_through_unchanged() {
        let mut bed = TestBed::new();
        let signer = Keypair::generate();
        bed.authorize_publisher(signer.address());

        let mut request = register_content_request(signer.address(), 0, "h1", "T", "D");
        request.value = U256::from(42u64);
        request.gas = 77_000;
        let signature = sign(&bed.forwarder, &signer, &request);
        bed.execute(&request, &signature).unwrap();

        let seen = bed.dispatcher.last_request.clone().unwrap();
        assert_eq!(seen.caller, FORWARDER_ADDRESS);
        assert_eq!(seen.to, REGISTRY_ADDRESS);
        assert_eq!(seen.value, U256::from(42u64));
        assert_eq!(seen.gas_limit, 77_000);

        let input = seen.input.as_slice();
        assert_eq!(&input[..request.data.len()], request.data.as_slice());
        assert_eq!(&input[request.data.len()..], signer.address().as_bytes());
    }

    /// Read operations travel through the forwarder like any other call and
    /// consume the signer's nonce.
    #[test]
    fn test_views_travel_through_forwarder() {
        let mut bed = TestBed::new();
        let signer = Keypair::generate();
        bed.authorize_publisher(signer.address());

        let register = register_content_request(signer.address(), 0, "h1", "T", "D");
        let register_sig = sign(&bed.forwarder, &signer, &register);
        bed.execute(&register, &register_sig).unwrap();

        let mut view = register_content_request(signer.address(), 1, "unused", "", "");
        view.data = wire::encode_call(&RegistryCall::GetAllHashes);
        let view_sig = sign(&bed.forwarder, &signer, &view);
        let output = bed.execute(&view, &view_sig).unwrap();

        assert_eq!(
            wire::decode_response(output.as_slice()),
            Some(RegistryResponse::Hashes(vec!["h1".to_string()]))
        );
        assert_eq!(bed.forwarder.get_nonce(signer.address()), 2);
    }

    /// A failed downstream call bubbles its revert data verbatim and leaves
    /// the signer's counter untouched.
    #[test]
    fn test_downstream_failure_bubbles_and_discards_effects() {
        let mut bed = TestBed::new();
        let signer = Keypair::generate();
        // Deliberately not a publisher.

        let request = register_content_request(signer.address(), 0, "h1", "T", "D");
        let signature = sign(&bed.forwarder, &signer, &request);
        let err = bed.execute(&request, &signature).unwrap_err();

        match err {
            ForwarderError::ForwardedCallFailed {
                revert_data: Some(data),
            } => {
                assert_eq!(
                    wire::decode_error(data.as_slice()),
                    Some(RegistryError::Unauthorized)
                );
            }
            other => panic!("expected bubbled revert data, got {other:?}"),
        }
        assert_eq!(bed.forwarder.get_nonce(signer.address()), 0);
        assert_eq!(bed.registry.borrow().content_count(), 0);
        assert!(bed.forwarder.events().is_empty());
    }

    /// A target nobody is registered at fails with the generic marker.
    #[test]
    fn test_unknown_target_fails_generically() {
        let mut bed = TestBed::new();
        let signer = Keypair::generate();

        let mut request = register_content_request(signer.address(), 0, "h1", "T", "D");
        request.to = shared_types::Address::new([0x99; 20]);
        let signature = sign(&bed.forwarder, &signer, &request);

        assert_eq!(
            bed.execute(&request, &signature).unwrap_err(),
            ForwarderError::ForwardedCallFailed { revert_data: None }
        );
        assert_eq!(bed.forwarder.get_nonce(signer.address()), 0);
    }

    /// Counters are per signer; interleaved submissions do not interfere.
    #[test]
    fn test_signers_are_sequenced_independently() {
        let mut bed = TestBed::new();
        let alice = Keypair::generate();
        let bob = Keypair::generate();
        bed.authorize_publisher(alice.address());
        bed.authorize_publisher(bob.address());

        let a0 = register_content_request(alice.address(), 0, "a0", "T", "D");
        let a0_sig = sign(&bed.forwarder, &alice, &a0);
        let b0 = register_content_request(bob.address(), 0, "b0", "T", "D");
        let b0_sig = sign(&bed.forwarder, &bob, &b0);
        let a1 = register_content_request(alice.address(), 1, "a1", "T", "D");
        let a1_sig = sign(&bed.forwarder, &alice, &a1);

        bed.execute(&a0, &a0_sig).unwrap();
        bed.execute(&b0, &b0_sig).unwrap();
        bed.execute(&a1, &a1_sig).unwrap();

        assert_eq!(bed.forwarder.get_nonce(alice.address()), 2);
        assert_eq!(bed.forwarder.get_nonce(bob.address()), 1);
        assert_eq!(
            bed.registry.borrow().get_all_hashes(),
            &["a0".to_string(), "b0".to_string(), "a1".to_string()]
        );
    }
}
