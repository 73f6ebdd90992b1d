//! Engine key adapter for the keyagree library
//!
//! The only crate in the workspace that talks to the elliptic-curve backend
//! (RustCrypto `p256`, `k256` and `elliptic-curve`). It converts binary key
//! containers into opaque [`EngineKey`] handles and back, and runs the raw
//! ECDH and ECDSA operations on those handles. Backend error types are
//! translated into [`keyagree_api::Error`] before anything is returned.
//!
//! secp256k1 support is behind the `secp256k1` cargo feature (on by default).

pub mod adapter;
pub mod ecdh;
pub mod ecdsa;
mod error;
mod key;
pub mod slot;

pub use adapter::{
    decode, decode_private, decode_public, encode_private, encode_private_into, encode_public,
    encode_public_into, encoded_private_len, encoded_public_len,
};
pub use ecdh::{ecdh_into, shared_secret_len};
pub use ecdsa::{ecdsa_sign, ecdsa_verify, signature_len};
pub use key::EngineKey;
pub use slot::KeySlot;

use elliptic_curve::SecretKey;
use key::{EcKey, Material};
use keyagree_api::{Curve, Error, Result};
use rand::{CryptoRng, RngCore};

/// Whether the backend for `curve` is compiled in
pub const fn is_supported(curve: Curve) -> bool {
    match curve {
        Curve::P256 => true,
        Curve::Secp256k1 => cfg!(feature = "secp256k1"),
    }
}

pub(crate) fn unsupported(context: &'static str, curve: Curve) -> Error {
    Error::invalid_parameter(context, format!("curve {curve} is not built into this engine"))
}

/// Generate a fresh key pair on `curve`
pub fn generate<R: CryptoRng + RngCore>(curve: Curve, rng: &mut R) -> Result<EngineKey> {
    let material = match curve {
        Curve::P256 => Material::P256(EcKey::Private(SecretKey::random(rng))),
        #[cfg(feature = "secp256k1")]
        Curve::Secp256k1 => Material::Secp256k1(EcKey::Private(SecretKey::random(rng))),
        #[allow(unreachable_patterns)]
        _ => return Err(unsupported("generate", curve)),
    };
    Ok(EngineKey::new(material))
}
