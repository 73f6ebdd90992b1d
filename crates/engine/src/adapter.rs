//! Engine key adapter: binary key containers to backend keys and back
//!
//! Decoding validates the container framing first (see
//! [`keyagree_container::EcKeyContainer::parse`]) and then hands the key
//! material to the backend, which rejects out-of-range scalars and points
//! that are not on the curve. Those backend rejections surface as Fail.

use crate::error::BackendResultExt;
use crate::key::{with_ec_key, EcKey, EngineKey, Material};
use crate::unsupported;
use elliptic_curve::sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{AffinePoint, CurveArithmetic, FieldBytesSize, PublicKey, SecretKey};
use keyagree_api::buffer::query_and_fill;
use keyagree_api::error::{validate, Error, Result};
use keyagree_api::{Curve, KeyKind};
use keyagree_container::ec_key::{self, EcKeyContainer};
use zeroize::Zeroizing;

fn decode_scalar<C>(material: &[u8]) -> Result<EcKey<C>>
where
    C: CurveArithmetic,
{
    SecretKey::<C>::from_slice(material)
        .map(EcKey::Private)
        .backend("decode_private")
}

fn decode_point<C>(material: &[u8]) -> Result<EcKey<C>>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    PublicKey::<C>::from_sec1_bytes(material)
        .map(EcKey::Public)
        .backend("decode_public")
}

/// Decode a private key container for `curve`
pub fn decode_private(curve: Curve, container: &[u8]) -> Result<EngineKey> {
    let parsed = EcKeyContainer::parse(container, KeyKind::Private, curve)?;
    let material = match curve {
        Curve::P256 => Material::P256(decode_scalar(parsed.material())?),
        #[cfg(feature = "secp256k1")]
        Curve::Secp256k1 => Material::Secp256k1(decode_scalar(parsed.material())?),
        #[allow(unreachable_patterns)]
        _ => return Err(unsupported("decode_private", curve)),
    };
    Ok(EngineKey::new(material))
}

/// Decode a public key container for `curve`
///
/// The identity and any point not on the curve are rejected with Fail.
pub fn decode_public(curve: Curve, container: &[u8]) -> Result<EngineKey> {
    let parsed = EcKeyContainer::parse(container, KeyKind::Public, curve)?;
    let material = match curve {
        Curve::P256 => Material::P256(decode_point(parsed.material())?),
        #[cfg(feature = "secp256k1")]
        Curve::Secp256k1 => Material::Secp256k1(decode_point(parsed.material())?),
        #[allow(unreachable_patterns)]
        _ => return Err(unsupported("decode_public", curve)),
    };
    Ok(EngineKey::new(material))
}

/// Decode either kind of container, dispatching on the first tag byte
///
/// The header-length check runs before the tag byte is read.
pub fn decode(curve: Curve, container: &[u8]) -> Result<EngineKey> {
    match ec_key::peek_kind(container)? {
        KeyKind::Private => decode_private(curve, container),
        KeyKind::Public => decode_public(curve, container),
    }
}

/// Container length of a private key on `curve`
pub fn encoded_private_len(curve: Curve) -> usize {
    ec_key::encoded_len(KeyKind::Private, curve)
}

/// Container length of a public key on `curve`
pub fn encoded_public_len(curve: Curve) -> usize {
    ec_key::encoded_len(KeyKind::Public, curve)
}

/// Write `key`'s private scalar as a container
///
/// InvalidParameter if `key` is public-only; BufferTooSmall if `out` is
/// shorter than [`encoded_private_len`].
pub fn encode_private_into(key: &EngineKey, out: &mut [u8]) -> Result<usize> {
    validate::parameter(key.is_private(), "encode_private", "key has no private part")?;
    ec_key::write_with(KeyKind::Private, key.curve(), out, |dst| {
        with_ec_key!(&key.material, ec => {
            let secret = ec
                .secret()
                .ok_or_else(|| Error::invalid_parameter("encode_private", "key has no private part"))?;
            let bytes = Zeroizing::new(secret.to_bytes());
            validate::exact_length("encode_private", bytes.len(), dst.len())?;
            dst.copy_from_slice(bytes.as_slice());
            Ok(())
        })
    })
}

/// Write `key`'s public point (SEC1 compressed) as a container
///
/// Works for both private and public keys.
pub fn encode_public_into(key: &EngineKey, out: &mut [u8]) -> Result<usize> {
    ec_key::write_with(KeyKind::Public, key.curve(), out, |dst| {
        with_ec_key!(&key.material, ec => {
            let point = ec.public_key().to_encoded_point(true);
            validate::exact_length("encode_public", point.len(), dst.len())?;
            dst.copy_from_slice(point.as_bytes());
            Ok(())
        })
    })
}

/// Allocating form of [`encode_private_into`]; the buffer is wiped on drop
pub fn encode_private(key: &EngineKey) -> Result<Zeroizing<Vec<u8>>> {
    keyagree_api::buffer::query_and_fill_secret("encode_private", |out| {
        encode_private_into(key, out)
    })
}

/// Allocating form of [`encode_public_into`]
pub fn encode_public(key: &EngineKey) -> Result<Vec<u8>> {
    query_and_fill("encode_public", |out| encode_public_into(key, out))
}

/// Encode `key` as a container of `kind`
pub fn encode_into(key: &EngineKey, kind: KeyKind, out: &mut [u8]) -> Result<usize> {
    match kind {
        KeyKind::Private => encode_private_into(key, out),
        KeyKind::Public => encode_public_into(key, out),
    }
}
