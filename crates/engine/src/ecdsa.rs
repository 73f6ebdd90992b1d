//! ECDSA over engine keys (SHA-256, fixed-width r || s encoding)

use crate::error::BackendResultExt;
use crate::key::{EngineKey, Material};
use keyagree_api::error::{validate, Error, Result};
use keyagree_api::Curve;
use tracing::trace;

/// Fixed signature length on `curve`
pub fn signature_len(curve: Curve) -> usize {
    curve.signature_size()
}

fn fill_signature(bytes: &[u8], out: &mut [u8]) -> Result<usize> {
    validate::buffer("ecdsa_sign", out.len(), bytes.len())?;
    out[..bytes.len()].copy_from_slice(bytes);
    Ok(bytes.len())
}

// The backend crates expose distinct ECDSA key types with the same API.
mod p256_impl {
    use super::*;
    use p256::ecdsa::signature::{Signer, Verifier};
    use p256::ecdsa::{Signature, SigningKey, VerifyingKey};

    pub(super) fn sign(secret: &p256::SecretKey, msg: &[u8], out: &mut [u8]) -> Result<usize> {
        let signature: Signature = SigningKey::from(secret).try_sign(msg).backend("ecdsa_sign")?;
        fill_signature(&signature.to_bytes(), out)
    }

    pub(super) fn verify(public: &p256::PublicKey, msg: &[u8], sig: &[u8]) -> Result<()> {
        let signature = Signature::from_slice(sig).backend("ecdsa_verify")?;
        VerifyingKey::from(public)
            .verify(msg, &signature)
            .backend("ecdsa_verify")
    }
}

#[cfg(feature = "secp256k1")]
mod k256_impl {
    use super::*;
    use k256::ecdsa::signature::{Signer, Verifier};
    use k256::ecdsa::{Signature, SigningKey, VerifyingKey};

    pub(super) fn sign(secret: &k256::SecretKey, msg: &[u8], out: &mut [u8]) -> Result<usize> {
        let signature: Signature = SigningKey::from(secret).try_sign(msg).backend("ecdsa_sign")?;
        fill_signature(&signature.to_bytes(), out)
    }

    pub(super) fn verify(public: &k256::PublicKey, msg: &[u8], sig: &[u8]) -> Result<()> {
        let signature = Signature::from_slice(sig).backend("ecdsa_verify")?;
        VerifyingKey::from(public)
            .verify(msg, &signature)
            .backend("ecdsa_verify")
    }
}

/// Sign `msg` with `key`'s private scalar, writing the signature into `out`
///
/// InvalidParameter if `key` is public-only; BufferTooSmall (carrying
/// [`signature_len`]) if `out` is too short.
pub fn ecdsa_sign(key: &EngineKey, msg: &[u8], out: &mut [u8]) -> Result<usize> {
    const CONTEXT: &str = "ecdsa_sign";
    trace!(curve = %key.curve(), msg_len = msg.len(), "ecdsa sign");
    validate::buffer(CONTEXT, out.len(), signature_len(key.curve()))?;
    let no_secret = || Error::invalid_parameter(CONTEXT, "key has no private part");
    match &key.material {
        Material::P256(ec) => p256_impl::sign(ec.secret().ok_or_else(no_secret)?, msg, out),
        #[cfg(feature = "secp256k1")]
        Material::Secp256k1(ec) => k256_impl::sign(ec.secret().ok_or_else(no_secret)?, msg, out),
    }
}

/// Verify a fixed-width signature over `msg` with `key`'s public point
///
/// A malformed or non-matching signature yields InvalidSignature.
pub fn ecdsa_verify(key: &EngineKey, msg: &[u8], sig: &[u8]) -> Result<()> {
    const CONTEXT: &str = "ecdsa_verify";
    trace!(curve = %key.curve(), msg_len = msg.len(), "ecdsa verify");
    if sig.len() != signature_len(key.curve()) {
        return Err(Error::InvalidSignature { context: CONTEXT });
    }
    match &key.material {
        Material::P256(ec) => p256_impl::verify(&ec.public_key(), msg, sig),
        #[cfg(feature = "secp256k1")]
        Material::Secp256k1(ec) => k256_impl::verify(&ec.public_key(), msg, sig),
    }
}
