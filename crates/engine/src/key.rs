//! Opaque backend key handle

use elliptic_curve::sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint};
use elliptic_curve::{AffinePoint, CurveArithmetic, FieldBytesSize, PublicKey, SecretKey};
use keyagree_api::{Curve, KeyKind};
use p256::NistP256;

#[cfg(feature = "secp256k1")]
use k256::Secp256k1;

/// One key on curve `C`: a secret scalar (with its implied public point) or
/// a bare public point
#[derive(Clone)]
pub(crate) enum EcKey<C: CurveArithmetic> {
    Private(SecretKey<C>),
    Public(PublicKey<C>),
}

impl<C> EcKey<C>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    pub(crate) fn kind(&self) -> KeyKind {
        match self {
            Self::Private(_) => KeyKind::Private,
            Self::Public(_) => KeyKind::Public,
        }
    }

    pub(crate) fn secret(&self) -> Option<&SecretKey<C>> {
        match self {
            Self::Private(secret) => Some(secret),
            Self::Public(_) => None,
        }
    }

    pub(crate) fn public_key(&self) -> PublicKey<C> {
        match self {
            Self::Private(secret) => secret.public_key(),
            Self::Public(public) => public.clone(),
        }
    }
}

/// Backend key material, one variant per compiled-in curve
#[derive(Clone)]
pub(crate) enum Material {
    P256(EcKey<NistP256>),
    #[cfg(feature = "secp256k1")]
    Secp256k1(EcKey<Secp256k1>),
}

/// Run `$body` with `$key` bound to the curve-specific [`EcKey`]
macro_rules! with_ec_key {
    ($material:expr, $key:ident => $body:expr) => {
        match $material {
            $crate::key::Material::P256($key) => $body,
            #[cfg(feature = "secp256k1")]
            $crate::key::Material::Secp256k1($key) => $body,
        }
    };
}
pub(crate) use with_ec_key;

/// A decoded or generated key, ready for backend operations
///
/// The backend types inside are not reachable from outside the engine. A
/// private key always carries its public half.
#[derive(Clone)]
pub struct EngineKey {
    pub(crate) material: Material,
}

impl EngineKey {
    pub(crate) fn new(material: Material) -> Self {
        Self { material }
    }

    /// Curve the key belongs to
    pub fn curve(&self) -> Curve {
        match self.material {
            Material::P256(_) => Curve::P256,
            #[cfg(feature = "secp256k1")]
            Material::Secp256k1(_) => Curve::Secp256k1,
        }
    }

    /// Whether this is a private or a public-only key
    pub fn kind(&self) -> KeyKind {
        with_ec_key!(&self.material, key => key.kind())
    }

    pub fn is_private(&self) -> bool {
        self.kind() == KeyKind::Private
    }

    /// Public-only copy of this key
    pub fn to_public(&self) -> EngineKey {
        let material = match &self.material {
            Material::P256(key) => Material::P256(EcKey::Public(key.public_key())),
            #[cfg(feature = "secp256k1")]
            Material::Secp256k1(key) => Material::Secp256k1(EcKey::Public(key.public_key())),
        };
        Self::new(material)
    }
}

impl core::fmt::Debug for EngineKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EngineKey")
            .field("curve", &self.curve())
            .field("kind", &self.kind())
            .finish_non_exhaustive()
    }
}

impl PartialEq for EngineKey {
    /// Keys are equal when they hold the same public point and agree on
    /// whether a secret is present. Secrets themselves are never compared.
    fn eq(&self, other: &Self) -> bool {
        match (&self.material, &other.material) {
            (Material::P256(a), Material::P256(b)) => {
                a.kind() == b.kind() && a.public_key() == b.public_key()
            }
            #[cfg(feature = "secp256k1")]
            (Material::Secp256k1(a), Material::Secp256k1(b)) => {
                a.kind() == b.kind() && a.public_key() == b.public_key()
            }
            #[cfg(feature = "secp256k1")]
            _ => false,
        }
    }
}
