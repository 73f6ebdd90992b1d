//! Shared-secret derivation

use super::context::KeyContext;
use crate::buffer::query_and_fill_secret;
use crate::Result;
use zeroize::Zeroizing;

/// Diffie-Hellman style key agreement
///
/// Derivation follows the two-phase buffer protocol: call
/// [`derive_into`](Agreement::derive_into) with an empty buffer to learn the
/// size, then again with a buffer of that size.
pub trait Agreement: KeyContext {
    /// Length of the shared secret for this context's curve
    fn shared_secret_len(&self) -> usize;

    /// Derive the shared secret with a peer's public key container
    ///
    /// Requires a local private key. Returns the number of bytes written.
    fn derive_into(&self, peer_public: &[u8], out: &mut [u8]) -> Result<usize>;

    /// Derive the shared secret into a buffer that is wiped on drop
    fn derive(&self, peer_public: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        query_and_fill_secret("derive", |out| self.derive_into(peer_public, out))
    }
}
