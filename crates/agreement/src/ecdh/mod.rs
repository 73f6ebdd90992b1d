//! ECDH key agreement context
//!
//! # Usage
//!
//! ```
//! use keyagree_agreement::KeyAgreement;
//! use keyagree_api::{Agreement, KeyAgreementAlgorithm, KeyContext, KeyKind};
//!
//! let mut alice = KeyAgreement::create(KeyAgreementAlgorithm::EcP256)?;
//! let mut bob = KeyAgreement::create(KeyAgreementAlgorithm::EcP256)?;
//! alice.generate_key()?;
//! bob.generate_key()?;
//!
//! let alice_public = alice.export_key(KeyKind::Public)?;
//! let bob_public = bob.export_key(KeyKind::Public)?;
//!
//! // Query phase: an empty buffer reports the size to allocate
//! let required = alice.derive_into(&bob_public, &mut []).unwrap_err().required_len();
//! assert_eq!(required, Some(alice.shared_secret_len()));
//!
//! assert_eq!(alice.derive(&bob_public)?, bob.derive(&alice_public)?);
//! # Ok::<(), keyagree_api::Error>(())
//! ```
//!
//! The shared secret is the raw x-coordinate of the shared point. Run it
//! through a KDF before using it as a key.

use keyagree_api::error::{validate, Error, ResultExt};
use keyagree_api::{Agreement, Curve, KeyAgreementAlgorithm, KeyContext, KeyKind, Result};
use keyagree_engine::{self as engine, KeySlot};
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace, warn};

/// Key agreement context for one ECDH algorithm
///
/// Holds at most one key. `derive` borrows the context immutably, so one
/// context may serve many derivations (and many threads) while its key stays
/// fixed.
#[derive(Debug)]
pub struct KeyAgreement {
    algorithm: KeyAgreementAlgorithm,
    slot: KeySlot,
}

impl KeyAgreement {
    /// Create a context for `algorithm` with an empty key slot
    ///
    /// Fails with InvalidParameter when the algorithm's backend is not
    /// compiled in.
    pub fn create(algorithm: KeyAgreementAlgorithm) -> Result<Self> {
        let slot = KeySlot::new(algorithm.curve()).with_context("KeyAgreement::create")?;
        debug!(%algorithm, "created key agreement context");
        Ok(Self { algorithm, slot })
    }

    /// Release the context; key material is wiped as it drops
    pub fn destroy(self) -> Result<()> {
        debug!(algorithm = %self.algorithm, "destroyed key agreement context");
        Ok(())
    }

    pub fn algorithm(&self) -> KeyAgreementAlgorithm {
        self.algorithm
    }
}

/// Destroy a context that may be absent
///
/// InvalidParameter for `None`, otherwise the result of
/// [`KeyAgreement::destroy`].
pub fn destroy(context: Option<KeyAgreement>) -> Result<()> {
    context
        .ok_or_else(|| Error::invalid_parameter("destroy", "no context"))?
        .destroy()
}

impl KeyContext for KeyAgreement {
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

impl Agreement for KeyAgreement {
    fn shared_secret_len(&self) -> usize {
        engine::shared_secret_len(self.curve())
    }

    fn derive_into(&self, peer_public: &[u8], out: &mut [u8]) -> Result<usize> {
        const CONTEXT: &str = "derive";

        // The peer key only lives for the duration of this call
        let peer = engine::decode_public(self.curve(), peer_public).map_err(|e| {
            warn!(algorithm = %self.algorithm, status = %e.status(), "peer key rejected");
            e
        })?;
        let local = self.slot.private_key(CONTEXT)?;

        let required = self.shared_secret_len();
        trace!(algorithm = %self.algorithm, required, available = out.len(), "derive query");
        validate::buffer(CONTEXT, out.len(), required)?;

        let written = engine::ecdh_into(local, &peer, out)?;
        trace!(algorithm = %self.algorithm, written, "derive fill");
        Ok(written)
    }
}
