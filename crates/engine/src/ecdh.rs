//! Raw ECDH over engine keys

use crate::key::{EcKey, EngineKey, Material};
use elliptic_curve::sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{AffinePoint, CurveArithmetic, FieldBytes, FieldBytesSize};
use keyagree_api::error::{validate, Error, Result};
use keyagree_api::Curve;
use tracing::trace;

const CONTEXT: &str = "ecdh";

/// Length of the shared secret (affine x-coordinate) on `curve`
pub fn shared_secret_len(curve: Curve) -> usize {
    curve.shared_secret_size()
}

fn agree<C>(local: &EcKey<C>, peer: &EcKey<C>, out: &mut [u8]) -> Result<usize>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let secret = local
        .secret()
        .ok_or_else(|| Error::invalid_parameter(CONTEXT, "local key has no private part"))?;

    let required = FieldBytes::<C>::default().len();
    validate::buffer(CONTEXT, out.len(), required)?;

    let peer = peer.public_key();
    let shared = elliptic_curve::ecdh::diffie_hellman(secret.to_nonzero_scalar(), peer.as_affine());
    let raw = shared.raw_secret_bytes();
    out[..required].copy_from_slice(raw);
    Ok(required)
}

/// Compute the ECDH shared secret of `local` (private) and `peer` into `out`
///
/// - `local` without a private part: InvalidParameter
/// - keys on different curves: InvalidParameter
/// - `out` too short: BufferTooSmall carrying the secret length
///
/// Returns the number of bytes written. Only the x-coordinate is emitted; no
/// key derivation function is applied.
pub fn ecdh_into(local: &EngineKey, peer: &EngineKey, out: &mut [u8]) -> Result<usize> {
    trace!(curve = %local.curve(), out_len = out.len(), "ecdh");
    match (&local.material, &peer.material) {
        (Material::P256(a), Material::P256(b)) => agree(a, b, out),
        #[cfg(feature = "secp256k1")]
        (Material::Secp256k1(a), Material::Secp256k1(b)) => agree(a, b, out),
        #[cfg(feature = "secp256k1")]
        _ => Err(Error::invalid_parameter(
            CONTEXT,
            format!(
                "peer key is on {}, local key on {}",
                peer.curve(),
                local.curve()
            ),
        )),
    }
}
