//! Property-based tests for container parsing and key agreement

use keyagree::container::{ec_key, HEADER_LEN};
use keyagree::prelude::*;
use keyagree_tests::framed_key;
use proptest::prelude::*;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Byte strings shorter than a container header
fn short_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..HEADER_LEN)
}

/// Header-sized or longer strings whose first byte is not a key kind
fn foreign_kind() -> impl Strategy<Value = Vec<u8>> {
    (
        any::<u8>().prop_filter("not a key kind", |b| *b != b'R' && *b != b'U'),
        prop::collection::vec(any::<u8>(), HEADER_LEN - 1..=96),
    )
        .prop_map(|(first, rest)| {
            let mut bytes = Vec::with_capacity(rest.len() + 1);
            bytes.push(first);
            bytes.extend(rest);
            bytes
        })
}

fn keyed(seed: u64) -> KeyAgreement {
    let mut ctx = KeyAgreement::create(KeyAgreementAlgorithm::EcP256).unwrap();
    ctx.generate_key_with_rng(&mut ChaCha20Rng::seed_from_u64(seed))
        .unwrap();
    ctx
}

proptest! {
    #[test]
    fn short_input_is_invalid_parameter(bytes in short_bytes()) {
        let mut ctx = keyed(1);
        prop_assert_eq!(ctx.import_key(&bytes).unwrap_err().status(), Status::InvalidParameter);
        prop_assert_eq!(ctx.derive(&bytes).unwrap_err().status(), Status::InvalidParameter);
        prop_assert_eq!(ec_key::peek_kind(&bytes).unwrap_err().status(), Status::InvalidParameter);
        prop_assert!(ctx.has_private_key());
    }

    #[test]
    fn foreign_kind_is_invalid_parameter(bytes in foreign_kind()) {
        let mut ctx = keyed(2);
        prop_assert_eq!(ctx.import_key(&bytes).unwrap_err().status(), Status::InvalidParameter);
    }

    #[test]
    fn arbitrary_bytes_never_yield_a_secret(bytes in prop::collection::vec(any::<u8>(), 0..128)) {
        let ctx = keyed(3);
        prop_assert!(ctx.derive(&bytes).is_err());
    }

    #[test]
    fn random_public_payload_never_panics(payload in any::<[u8; 33]>()) {
        // Correct framing, arbitrary point: either a valid key or Fail
        let ctx = keyed(4);
        let container = framed_key(KeyKind::Public, Curve::P256, &payload);
        match ctx.derive(&container) {
            Ok(secret) => prop_assert_eq!(secret.len(), ctx.shared_secret_len()),
            Err(e) => prop_assert_eq!(e.status(), Status::Fail),
        }
    }

    #[test]
    fn agreement_is_symmetric(seed_a in any::<u64>(), seed_b in any::<u64>()) {
        prop_assume!(seed_a != seed_b);
        let a = keyed(seed_a);
        let b = keyed(seed_b);
        let a_public = a.export_key(KeyKind::Public).unwrap();
        let b_public = b.export_key(KeyKind::Public).unwrap();
        prop_assert_eq!(a.derive(&b_public).unwrap(), b.derive(&a_public).unwrap());
    }

    #[test]
    fn public_export_import_is_byte_exact(seed in any::<u64>()) {
        let source = keyed(seed);
        let exported = source.export_key(KeyKind::Public).unwrap();

        let mut target = KeyAgreement::create(KeyAgreementAlgorithm::EcP256).unwrap();
        target.import_key(&exported).unwrap();
        prop_assert_eq!(target.export_key(KeyKind::Public).unwrap(), exported);
    }

    #[test]
    fn status_code_lookup(code in any::<i32>()) {
        if let Some(status) = Status::from_code(code) {
            prop_assert_eq!(status.code(), code);
        }
    }
}
