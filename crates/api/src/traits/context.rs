//! Key lifecycle shared by every primitive context

use crate::buffer::query_and_fill_secret;
use crate::{Curve, KeyKind, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Key slot operations common to all primitive contexts
///
/// # State
///
/// A freshly created context holds no key. Generating or importing a key
/// replaces whatever the slot held before; a failed import leaves the slot
/// untouched.
pub trait KeyContext {
    /// Curve the context is bound to
    fn curve(&self) -> Curve;

    /// Whether the slot holds a private key (and therefore its public half)
    fn has_private_key(&self) -> bool;

    /// Whether a public key can be exported from the slot
    fn has_public_key(&self) -> bool;

    /// Generate a fresh key pair using the provided CSPRNG
    fn generate_key_with_rng<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<()>;

    /// Generate a fresh key pair using the operating system RNG
    fn generate_key(&mut self) -> Result<()> {
        self.generate_key_with_rng(&mut OsRng)
    }

    /// Import a key from a binary key container
    ///
    /// The first tag byte selects private (`'R'`) or public (`'U'`) decoding.
    fn import_key(&mut self, container: &[u8]) -> Result<()>;

    /// Size of the container `export_key_into` would write for `kind`
    fn exported_key_len(&self, kind: KeyKind) -> Result<usize>;

    /// Encode the current key into `out`, returning the bytes written
    ///
    /// Fails with `BufferTooSmall` (carrying the required size) when `out`
    /// is too short, and with `InvalidParameter` when the slot holds no key
    /// of the requested kind.
    fn export_key_into(&self, kind: KeyKind, out: &mut [u8]) -> Result<usize>;

    /// Encode the current key into a freshly allocated container
    ///
    /// The result is wiped on drop since it may hold a private scalar.
    fn export_key(&self, kind: KeyKind) -> Result<Zeroizing<Vec<u8>>> {
        query_and_fill_secret("export_key", |out| self.export_key_into(kind, out))
    }
}
