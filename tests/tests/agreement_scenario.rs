//! End-to-end key agreement scenarios driven through the test harness

use keyagree::prelude::*;
use keyagree_tests::{framed_key, init_tracing, string_to_bytes, TestContext};

// RFC 5903 section 8.1 (ECDH over P-256)
const RFC5903_I: &str = "c88f01f510d9ac3f70a292daa2316de544e9aab8afe84049c62a9c57862d1433";
const RFC5903_GI: &str = "03dad0b65394221cf9b051e1feca5787d098dfe637fc90b9ef945d0c3772581180";
const RFC5903_GR: &str = "03d12dfb5289c8d4f81208b70270398c342296970a0bccb74c736fc7554494bf63";
const RFC5903_GIR: &str = "d6840f6b42f6edafd13116e0e12565202fef8e9ece7dce03812464d04b9442de";

fn scenario(t: &mut TestContext) {
    let algorithm = KeyAgreementAlgorithm::EcP256;

    let h1 = KeyAgreement::create(algorithm);
    let h2 = KeyAgreement::create(algorithm);
    t.fail_unless(h1.is_ok() && h2.is_ok(), "create H1 and H2");
    let (Ok(mut h1), Ok(mut h2)) = (h1, h2) else {
        return;
    };

    t.fail_unless(h1.generate_key().is_ok(), "generate H1");
    t.fail_unless(h2.generate_key().is_ok(), "generate H2");

    let c1 = h1.export_key(KeyKind::Public);
    let c2 = h2.export_key(KeyKind::Public);
    t.fail_unless(c1.is_ok() && c2.is_ok(), "export public keys");
    let (Ok(c1), Ok(c2)) = (c1, c2) else {
        return;
    };

    // Two-phase derivation for H1
    let query = h1.derive_into(&c2, &mut []);
    let required = query.as_ref().err().and_then(Error::required_len);
    t.fail_unless(
        status_of(&query) == Status::BufferTooSmall,
        "empty buffer reports BufferTooSmall",
    );
    t.fail_unless(required.is_some_and(|n| n > 0), "required length is positive");

    let mut s1 = vec![0u8; required.unwrap_or_default()];
    t.fail_unless(
        h1.derive_into(&c2, &mut s1).ok() == Some(s1.len()),
        "derive H1 with exact buffer",
    );

    let s2 = h2.derive(&c1);
    t.fail_unless(
        s2.as_ref().is_ok_and(|s2| s2.as_slice() == s1.as_slice()),
        "shared secrets are byte-identical",
    );

    t.fail_unless(h1.destroy().is_ok(), "destroy H1");
    t.fail_unless(h2.destroy().is_ok(), "destroy H2");
}

fn rfc5903_vector(t: &mut TestContext) {
    let mut scalar = [0u8; 32];
    let mut gi = [0u8; 33];
    let mut gr = [0u8; 33];
    let mut gir = [0u8; 32];
    t.fail_unless(
        string_to_bytes(RFC5903_I, &mut scalar).is_ok()
            && string_to_bytes(RFC5903_GI, &mut gi).is_ok()
            && string_to_bytes(RFC5903_GR, &mut gr).is_ok()
            && string_to_bytes(RFC5903_GIR, &mut gir).is_ok(),
        "decode vectors",
    );

    let Ok(mut ctx) = KeyAgreement::create(KeyAgreementAlgorithm::EcP256) else {
        t.fail_if(true, "create");
        return;
    };
    t.fail_unless(
        ctx.import_key(&framed_key(KeyKind::Private, Curve::P256, &scalar))
            .is_ok(),
        "import private scalar",
    );

    let public = ctx.export_key(KeyKind::Public);
    t.fail_unless(
        public.as_ref().is_ok_and(|c| c[12..] == gi[..]),
        "public key matches g^i",
    );

    let secret = ctx.derive(&framed_key(KeyKind::Public, Curve::P256, &gr));
    t.fail_unless(
        secret.as_ref().is_ok_and(|s| s.as_slice() == gir.as_slice()),
        "shared secret matches g^ir",
    );
}

fn distinct_peers(t: &mut TestContext) {
    let Ok(mut local) = KeyAgreement::create(KeyAgreementAlgorithm::EcP256) else {
        t.fail_if(true, "create");
        return;
    };
    t.fail_unless(local.generate_key().is_ok(), "generate local key");

    let mut secrets = Vec::new();
    for _ in 0..8 {
        let Ok(mut peer) = KeyAgreement::create(KeyAgreementAlgorithm::EcP256) else {
            t.fail_if(true, "create peer");
            return;
        };
        t.fail_unless(peer.generate_key().is_ok(), "generate peer key");
        let Ok(public) = peer.export_key(KeyKind::Public) else {
            t.fail_if(true, "export peer key");
            return;
        };
        match local.derive(&public) {
            Ok(secret) => secrets.push(secret),
            Err(_) => t.fail_if(true, "derive with peer"),
        }
    }

    for (i, a) in secrets.iter().enumerate() {
        for b in &secrets[i + 1..] {
            t.fail_if(a == b, "secrets with distinct peers differ");
        }
    }
}

#[test]
fn test_key_agreement_suite() {
    init_tracing();
    let mut ctx = TestContext::new();
    ctx.enter_suite("key agreement: EC-P256");
    ctx.run_test("scenario", scenario);
    ctx.run_test("rfc5903_vector", rfc5903_vector);
    ctx.run_test("distinct_peers", distinct_peers);

    let report = ctx.finish();
    println!("{report}");
    assert_eq!(report.cases().len(), 3);
    report.into_result().unwrap();
}

#[test]
fn test_every_algorithm_round_trip() {
    init_tracing();
    for algorithm in KeyAgreementAlgorithm::ALL {
        let Ok(mut h1) = KeyAgreement::create(algorithm) else {
            continue;
        };
        let mut h2 = KeyAgreement::create(algorithm).unwrap();
        h1.generate_key().unwrap();
        h2.generate_key().unwrap();

        let c1 = h1.export_key(KeyKind::Public).unwrap();
        let c2 = h2.export_key(KeyKind::Public).unwrap();
        assert_eq!(h1.derive(&c2).unwrap(), h2.derive(&c1).unwrap(), "{algorithm}");

        // A fresh handle restored from H1's private container agrees too
        let mut restored = KeyAgreement::create(algorithm).unwrap();
        restored
            .import_key(&h1.export_key(KeyKind::Private).unwrap())
            .unwrap();
        assert_eq!(restored.derive(&c2).unwrap(), h1.derive(&c2).unwrap());
    }
}

#[test]
fn test_shared_handle_across_threads() {
    init_tracing();
    let mut local = KeyAgreement::create(KeyAgreementAlgorithm::EcP256).unwrap();
    local.generate_key().unwrap();
    let mut peer = KeyAgreement::create(KeyAgreementAlgorithm::EcP256).unwrap();
    peer.generate_key().unwrap();
    let peer_public = peer.export_key(KeyKind::Public).unwrap();
    let expected = local.derive(&peer_public).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| local.derive(&peer_public).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
