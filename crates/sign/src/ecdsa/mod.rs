//! ECDSA signature context
//!
//! Signatures are SHA-256 ECDSA in the fixed-width `r || s` encoding (64
//! bytes on both supported curves). Signing needs a private key; verifying
//! works with a public-only slot too.

use keyagree_api::error::{Error, ResultExt};
use keyagree_api::{Curve, KeyContext, KeyKind, Result, SignatureAlgorithm, Signing};
use keyagree_engine::{self as engine, KeySlot};
use rand::{CryptoRng, RngCore};
use tracing::{debug, warn};

/// Signature context for one ECDSA algorithm
#[derive(Debug)]
pub struct SignContext {
    algorithm: SignatureAlgorithm,
    slot: KeySlot,
}

impl SignContext {
    /// Create a context for `algorithm` with an empty key slot
    pub fn create(algorithm: SignatureAlgorithm) -> Result<Self> {
        let slot = KeySlot::new(algorithm.curve()).with_context("SignContext::create")?;
        debug!(%algorithm, "created signature context");
        Ok(Self { algorithm, slot })
    }

    /// Release the context; key material is wiped as it drops
    pub fn destroy(self) -> Result<()> {
        debug!(algorithm = %self.algorithm, "destroyed signature context");
        Ok(())
    }

    pub fn algorithm(&self) -> SignatureAlgorithm {
        self.algorithm
    }
}

impl KeyContext for SignContext {
    fn curve(&self) -> Curve {
        self.slot.curve()
    }

    fn has_private_key(&self) -> bool {
        self.slot.has_private_key()
    }

    fn has_public_key(&self) -> bool {
        self.slot.has_public_key()
    }

    fn generate_key_with_rng<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<()> {
        self.slot.generate(rng).with_context("generate_key")
    }

    fn import_key(&mut self, container: &[u8]) -> Result<()> {
        self.slot.import(container).map(drop)
    }

    fn exported_key_len(&self, kind: KeyKind) -> Result<usize> {
        self.slot.exported_len(kind)
    }

    fn export_key_into(&self, kind: KeyKind, out: &mut [u8]) -> Result<usize> {
        self.slot.export_into(kind, out)
    }
}

impl Signing for SignContext {
    fn signature_len(&self) -> usize {
        engine::signature_len(self.curve())
    }

    fn sign_into(&self, message: &[u8], out: &mut [u8]) -> Result<usize> {
        let key = self.slot.private_key("sign")?;
        engine::ecdsa_sign(key, message, out).with_context("sign")
    }

    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        let key = self.slot.any_key("verify")?;
        engine::ecdsa_verify(key, message, signature).map_err(|e| {
            warn!(algorithm = %self.algorithm, "signature rejected");
            Error::with_context(e, "verify")
        })
    }
}
