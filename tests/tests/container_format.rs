//! Malformed and foreign containers fed through the public contexts

use keyagree::container::{ec_key, Container, HEADER_LEN};
use keyagree::prelude::*;
use keyagree_tests::{framed_key, init_tracing};

fn keyed() -> KeyAgreement {
    let mut ctx = KeyAgreement::create(KeyAgreementAlgorithm::EcP256).unwrap();
    ctx.generate_key().unwrap();
    ctx
}

#[test]
fn test_exported_layout() {
    let ctx = keyed();
    for (kind, tag, payload) in [
        (KeyKind::Private, b"REC2", 32usize),
        (KeyKind::Public, b"UEC2", 33usize),
    ] {
        let bytes = ctx.export_key(kind).unwrap();
        assert_eq!(&bytes[..4], tag);
        assert_eq!(bytes.len(), HEADER_LEN + payload);
        assert_eq!(
            u32::from_be_bytes(bytes[4..8].try_into().unwrap()) as usize,
            bytes.len()
        );

        let container = Container::parse(&bytes).unwrap();
        assert_eq!(container.payload().len(), payload);
    }
    assert_eq!(ctx.export_key(KeyKind::Public).unwrap()[12] & 0xFE, 0x02);
}

#[test]
fn test_short_containers_rejected() {
    init_tracing();
    let mut ctx = keyed();
    for len in 0..HEADER_LEN {
        // Even a valid-looking first tag byte must not be read
        let mut bytes = vec![0u8; len];
        if let Some(first) = bytes.first_mut() {
            *first = b'R';
        }
        assert_eq!(
            ctx.import_key(&bytes).unwrap_err().status(),
            Status::InvalidParameter,
            "length {len}"
        );
        assert_eq!(
            ctx.derive(&bytes).unwrap_err().status(),
            Status::InvalidParameter
        );
    }
    assert!(ctx.has_private_key());
}

#[test]
fn test_unknown_tags_rejected() {
    let mut ctx = keyed();
    let public = ctx.export_key(KeyKind::Public).unwrap();
    for (index, byte) in [(0, b'X'), (0, b'r'), (1, b'D'), (2, b'X'), (3, b'9')] {
        let mut bytes = public.to_vec();
        bytes[index] = byte;
        assert_eq!(
            ctx.import_key(&bytes).unwrap_err().status(),
            Status::InvalidParameter,
            "tag byte {index} = {byte:#x}"
        );
    }
}

#[test]
fn test_size_field_mismatch() {
    let mut ctx = keyed();
    let mut bytes = ctx.export_key(KeyKind::Public).unwrap().to_vec();
    bytes[7] = bytes[7].wrapping_add(1);
    assert_eq!(
        ctx.import_key(&bytes).unwrap_err().status(),
        Status::InvalidParameter
    );

    let mut padded = ctx.export_key(KeyKind::Public).unwrap().to_vec();
    padded.push(0);
    assert_eq!(
        ctx.import_key(&padded).unwrap_err().status(),
        Status::InvalidParameter
    );
}

#[test]
fn test_checksum_corruption() {
    let mut ctx = keyed();
    let public = ctx.export_key(KeyKind::Public).unwrap();
    for index in (0..public.len()).filter(|i| !(0..8).contains(i)) {
        let mut bytes = public.to_vec();
        bytes[index] ^= 0x01;
        assert_eq!(
            ctx.import_key(&bytes).unwrap_err().status(),
            Status::DataCorrupt,
            "byte {index}"
        );
    }
}

#[test]
fn test_wrong_payload_length() {
    let mut ctx = keyed();
    for len in [0, 31, 34, 65] {
        let bytes = framed_key(KeyKind::Public, Curve::P256, &vec![0x02; len]);
        assert_eq!(
            ctx.import_key(&bytes).unwrap_err().status(),
            Status::InvalidParameter,
            "payload {len}"
        );
    }
}

#[test]
fn test_backend_rejections_are_fail() {
    let mut ctx = keyed();

    // Uncompressed encodings do not fit the 33-byte payload
    let mut uncompressed_prefix = [0x5Au8; 33];
    uncompressed_prefix[0] = 0x04;
    let bytes = framed_key(KeyKind::Public, Curve::P256, &uncompressed_prefix);
    assert_eq!(ctx.import_key(&bytes).unwrap_err().status(), Status::Fail);

    // Scalar equal to zero
    let bytes = framed_key(KeyKind::Private, Curve::P256, &[0u8; 32]);
    assert_eq!(ctx.import_key(&bytes).unwrap_err().status(), Status::Fail);

    assert!(ctx.has_private_key());
}

#[test]
fn test_cross_curve_containers() {
    let mut k1 = KeyAgreement::create(KeyAgreementAlgorithm::EcSecp256k1).unwrap();
    k1.generate_key().unwrap();
    let k1_public = k1.export_key(KeyKind::Public).unwrap();
    assert_eq!(&k1_public[..4], b"UECK");
    assert_eq!(
        ec_key::peek_kind(&k1_public).unwrap(),
        KeyKind::Public
    );

    let mut p256 = keyed();
    assert_eq!(
        p256.import_key(&k1_public).unwrap_err().status(),
        Status::InvalidParameter
    );
    assert_eq!(
        p256.derive(&k1_public).unwrap_err().status(),
        Status::InvalidParameter
    );
}

#[test]
fn test_status_codes_are_stable() {
    let codes: Vec<i32> = [
        Status::Success,
        Status::Fail,
        Status::InvalidParameter,
        Status::NoMemory,
        Status::BufferTooSmall,
        Status::DataCorrupt,
        Status::InvalidSignature,
    ]
    .iter()
    .map(|status| status.code())
    .collect();
    assert_eq!(codes, [0, 11, 12, 13, 14, 15, 16]);
}
