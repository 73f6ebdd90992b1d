//! Algorithm, curve and key-kind identifiers
//!
//! These are the only names the facade uses for curves. Backend curve types
//! stay behind the engine crate.

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};
use keyagree_params::container::{
    CURVE_CODE_P256, CURVE_CODE_SECP256K1, PRIVATE_KEY_PREFIX, PUBLIC_KEY_PREFIX,
};
use keyagree_params::traditional::{ecdh, ecdsa};

/// Elliptic curves known to the facade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Curve {
    /// NIST P-256 (prime256v1)
    P256,
    /// SEC 2 secp256k1
    Secp256k1,
}

impl Curve {
    /// Curve code stored in byte 3 of a key container tag
    pub const fn code(self) -> u8 {
        match self {
            Self::P256 => CURVE_CODE_P256,
            Self::Secp256k1 => CURVE_CODE_SECP256K1,
        }
    }

    /// Look up a curve by its container tag code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            CURVE_CODE_P256 => Some(Self::P256),
            CURVE_CODE_SECP256K1 => Some(Self::Secp256k1),
            _ => None,
        }
    }

    /// Human-readable curve name
    pub const fn name(self) -> &'static str {
        match self {
            Self::P256 => "P-256",
            Self::Secp256k1 => "secp256k1",
        }
    }

    /// Length of an encoded private scalar
    pub const fn private_key_size(self) -> usize {
        match self {
            Self::P256 => ecdh::ECDH_P256_PRIVATE_KEY_SIZE,
            Self::Secp256k1 => ecdh::ECDH_SECP256K1_PRIVATE_KEY_SIZE,
        }
    }

    /// Length of an encoded (compressed) public point
    pub const fn public_key_size(self) -> usize {
        match self {
            Self::P256 => ecdh::ECDH_P256_PUBLIC_KEY_SIZE,
            Self::Secp256k1 => ecdh::ECDH_SECP256K1_PUBLIC_KEY_SIZE,
        }
    }

    /// Length of a raw ECDH shared secret
    pub const fn shared_secret_size(self) -> usize {
        match self {
            Self::P256 => ecdh::ECDH_P256_SHARED_SECRET_SIZE,
            Self::Secp256k1 => ecdh::ECDH_SECP256K1_SHARED_SECRET_SIZE,
        }
    }

    /// Length of a fixed-width ECDSA signature
    pub const fn signature_size(self) -> usize {
        match self {
            Self::P256 => ecdsa::ECDSA_P256_SIGNATURE_SIZE,
            Self::Secp256k1 => ecdsa::ECDSA_SECP256K1_SIGNATURE_SIZE,
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which half of a key pair a container holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyKind {
    Private,
    Public,
}

impl KeyKind {
    /// First tag byte for this kind
    pub const fn prefix(self) -> u8 {
        match self {
            Self::Private => PRIVATE_KEY_PREFIX,
            Self::Public => PUBLIC_KEY_PREFIX,
        }
    }

    /// Look up a kind from the first tag byte
    pub fn from_prefix(prefix: u8) -> Option<Self> {
        match prefix {
            PRIVATE_KEY_PREFIX => Some(Self::Private),
            PUBLIC_KEY_PREFIX => Some(Self::Public),
            _ => None,
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Private => f.write_str("private"),
            Self::Public => f.write_str("public"),
        }
    }
}

/// Key agreement schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyAgreementAlgorithm {
    /// ECDH over NIST P-256
    EcP256,
    /// ECDH over secp256k1
    EcSecp256k1,
}

impl KeyAgreementAlgorithm {
    /// Every scheme the facade can name, whether or not its backend is built
    pub const ALL: [Self; 2] = [Self::EcP256, Self::EcSecp256k1];

    /// Stable numeric identifier
    pub const fn id(self) -> u32 {
        match self {
            Self::EcP256 => 1,
            Self::EcSecp256k1 => 2,
        }
    }

    /// Look up a scheme by numeric identifier
    pub fn from_id(id: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.id() == id)
            .ok_or_else(|| {
                Error::invalid_parameter("KeyAgreementAlgorithm::from_id", "unknown algorithm id")
            })
    }

    /// Curve the scheme operates over
    pub const fn curve(self) -> Curve {
        match self {
            Self::EcP256 => Curve::P256,
            Self::EcSecp256k1 => Curve::Secp256k1,
        }
    }

    /// Canonical name, accepted by `FromStr`
    pub const fn name(self) -> &'static str {
        match self {
            Self::EcP256 => "ec-p256",
            Self::EcSecp256k1 => "ec-secp256k1",
        }
    }
}

impl fmt::Display for KeyAgreementAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyAgreementAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                Error::invalid_parameter("KeyAgreementAlgorithm::from_str", "unknown algorithm name")
            })
    }
}

/// Signature schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignatureAlgorithm {
    /// ECDSA over NIST P-256 with SHA-256
    EcdsaP256,
    /// ECDSA over secp256k1 with SHA-256
    EcdsaSecp256k1,
}

impl SignatureAlgorithm {
    /// Every scheme the facade can name, whether or not its backend is built
    pub const ALL: [Self; 2] = [Self::EcdsaP256, Self::EcdsaSecp256k1];

    /// Stable numeric identifier
    pub const fn id(self) -> u32 {
        match self {
            Self::EcdsaP256 => 1,
            Self::EcdsaSecp256k1 => 2,
        }
    }

    /// Look up a scheme by numeric identifier
    pub fn from_id(id: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.id() == id)
            .ok_or_else(|| {
                Error::invalid_parameter("SignatureAlgorithm::from_id", "unknown algorithm id")
            })
    }

    /// Curve the scheme operates over
    pub const fn curve(self) -> Curve {
        match self {
            Self::EcdsaP256 => Curve::P256,
            Self::EcdsaSecp256k1 => Curve::Secp256k1,
        }
    }

    /// Canonical name, accepted by `FromStr`
    pub const fn name(self) -> &'static str {
        match self {
            Self::EcdsaP256 => "ecdsa-p256",
            Self::EcdsaSecp256k1 => "ecdsa-secp256k1",
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                Error::invalid_parameter("SignatureAlgorithm::from_str", "unknown algorithm name")
            })
    }
}
