//! Elliptic-curve key containers
//!
//! Tag layout: `[kind, 'E', 'C', curve]` where `kind` is `'R'` for a private
//! key and `'U'` for a public key, and `curve` is the curve code from
//! [`Curve::code`]. Payloads:
//!
//! - private: big-endian scalar, field-size bytes
//! - public: SEC1 compressed point, field-size + 1 bytes
//!
//! The curve is carried in the tag, so a container always names the curve
//! its key belongs to.

use crate::header::{self, Container, ContainerHeader, Tag};
use keyagree_api::error::{validate, Error, Result};
use keyagree_api::{Curve, KeyKind};
use keyagree_params::container::EC_FAMILY;

/// Decoded EC key tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcKeyTag {
    kind: KeyKind,
    curve: Curve,
}

impl EcKeyTag {
    pub const fn new(kind: KeyKind, curve: Curve) -> Self {
        Self { kind, curve }
    }

    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Tag bytes for this kind and curve
    pub const fn to_bytes(self) -> Tag {
        [
            self.kind.prefix(),
            EC_FAMILY[0],
            EC_FAMILY[1],
            self.curve.code(),
        ]
    }

    /// Decode tag bytes, rejecting unknown kinds, families and curves
    pub fn parse(tag: Tag) -> Result<Self> {
        const CONTEXT: &str = "EcKeyTag::parse";
        let kind = KeyKind::from_prefix(tag[0])
            .ok_or_else(|| Error::invalid_parameter(CONTEXT, "unknown key kind"))?;
        validate::parameter(tag[1..3] == EC_FAMILY, CONTEXT, "not an EC key container")?;
        let curve = Curve::from_code(tag[3])
            .ok_or_else(|| Error::invalid_parameter(CONTEXT, "unknown curve code"))?;
        Ok(Self { kind, curve })
    }
}

/// Key kind of a container, read from the first tag byte
///
/// The header-length check happens before the tag is touched.
pub fn peek_kind(container: &[u8]) -> Result<KeyKind> {
    let tag = header::peek_tag(container)?;
    KeyKind::from_prefix(tag[0])
        .ok_or_else(|| Error::invalid_parameter("ec_key::peek_kind", "unknown key kind"))
}

/// Payload length for a key of `kind` on `curve`
pub const fn payload_len(kind: KeyKind, curve: Curve) -> usize {
    match kind {
        KeyKind::Private => curve.private_key_size(),
        KeyKind::Public => curve.public_key_size(),
    }
}

/// Total container length for a key of `kind` on `curve`
pub const fn encoded_len(kind: KeyKind, curve: Curve) -> usize {
    header::encoded_len(payload_len(kind, curve))
}

/// A verified EC key container
#[derive(Debug, Clone, Copy)]
pub struct EcKeyContainer<'a> {
    tag: EcKeyTag,
    material: &'a [u8],
}

impl<'a> EcKeyContainer<'a> {
    /// Parse and verify a container holding a `kind` key on `curve`
    ///
    /// Checks, in order: header length, tag, expected kind and curve,
    /// declared size, checksum, payload length. All failures are
    /// InvalidParameter except a checksum mismatch (DataCorrupt).
    pub fn parse(bytes: &'a [u8], kind: KeyKind, curve: Curve) -> Result<Self> {
        const CONTEXT: &str = "EcKeyContainer::parse";
        let tag = EcKeyTag::parse(ContainerHeader::parse(bytes)?.tag())?;

        if tag.kind() != kind {
            return Err(Error::invalid_parameter(
                CONTEXT,
                format!("expected a {kind} key container, found {}", tag.kind()),
            ));
        }
        if tag.curve() != curve {
            return Err(Error::invalid_parameter(
                CONTEXT,
                format!("container holds a {} key, expected {curve}", tag.curve()),
            ));
        }

        let container = Container::parse(bytes)?;
        let material = container.payload();
        validate::exact_length(CONTEXT, material.len(), payload_len(kind, curve))?;

        Ok(Self { tag, material })
    }

    pub fn tag(&self) -> EcKeyTag {
        self.tag
    }

    pub fn kind(&self) -> KeyKind {
        self.tag.kind()
    }

    pub fn curve(&self) -> Curve {
        self.tag.curve()
    }

    /// Raw key material (scalar or compressed point)
    pub fn material(&self) -> &'a [u8] {
        self.material
    }
}

/// Write an EC key container, with `fill` producing the key material
///
/// `fill` is handed exactly [`payload_len`] bytes. Uses the two-phase buffer
/// protocol: a short `out` yields BufferTooSmall with the total length.
pub fn write_with<F>(kind: KeyKind, curve: Curve, out: &mut [u8], fill: F) -> Result<usize>
where
    F: FnOnce(&mut [u8]) -> Result<()>,
{
    header::write_with(
        EcKeyTag::new(kind, curve).to_bytes(),
        payload_len(kind, curve),
        out,
        fill,
    )
}
