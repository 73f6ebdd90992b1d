//! Signature creation and verification

use super::context::KeyContext;
use crate::buffer::query_and_fill;
use crate::Result;

/// Digital signatures over the context's key
pub trait Signing: KeyContext {
    /// Length of a signature for this context's algorithm
    fn signature_len(&self) -> usize;

    /// Sign `message` into `out`, returning the bytes written
    ///
    /// Requires a private key. Uses the two-phase buffer protocol.
    fn sign_into(&self, message: &[u8], out: &mut [u8]) -> Result<usize>;

    /// Sign `message` into a freshly allocated buffer
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        query_and_fill("sign", |out| self.sign_into(message, out))
    }

    /// Verify `signature` over `message`
    ///
    /// Works with either a private or a public key in the slot. Fails with
    /// `InvalidSignature` when the signature does not match.
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()>;
}
