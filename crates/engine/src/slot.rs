//! Key slot owned by a primitive context

use crate::adapter;
use crate::key::EngineKey;
use crate::{generate, is_supported, unsupported};
use keyagree_api::error::{Error, Result};
use keyagree_api::{Curve, KeyKind};
use rand::{CryptoRng, RngCore};
use tracing::{debug, warn};

/// The single key a context holds, bound to one curve
///
/// Empty on creation. Generation and import replace the slot contents as a
/// whole, so a slot never holds a private key whose public half differs.
/// A failed generation or import leaves the previous key in place.
#[derive(Debug)]
pub struct KeySlot {
    curve: Curve,
    key: Option<EngineKey>,
}

impl KeySlot {
    /// Empty slot for `curve`; InvalidParameter if the curve is not built in
    pub fn new(curve: Curve) -> Result<Self> {
        if !is_supported(curve) {
            return Err(unsupported("KeySlot::new", curve));
        }
        Ok(Self { curve, key: None })
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    pub fn key(&self) -> Option<&EngineKey> {
        self.key.as_ref()
    }

    pub fn has_private_key(&self) -> bool {
        self.key.as_ref().is_some_and(EngineKey::is_private)
    }

    pub fn has_public_key(&self) -> bool {
        self.key.is_some()
    }

    /// The held key if it has a private part, InvalidParameter otherwise
    pub fn private_key(&self, context: &'static str) -> Result<&EngineKey> {
        self.key
            .as_ref()
            .filter(|key| key.is_private())
            .ok_or_else(|| Error::invalid_parameter(context, "no private key loaded"))
    }

    /// The held key (either kind), InvalidParameter if the slot is empty
    pub fn any_key(&self, context: &'static str) -> Result<&EngineKey> {
        self.key
            .as_ref()
            .ok_or_else(|| Error::invalid_parameter(context, "no key loaded"))
    }

    /// Replace the slot with a fresh key pair
    pub fn generate<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<()> {
        let key = generate(self.curve, rng)?;
        debug!(curve = %self.curve, "generated key pair");
        self.key = Some(key);
        Ok(())
    }

    /// Replace the slot with the key in `container`
    ///
    /// The first tag byte decides whether the container is decoded as a
    /// private or a public key. Importing a public key drops any private key
    /// held before.
    pub fn import(&mut self, container: &[u8]) -> Result<KeyKind> {
        match adapter::decode(self.curve, container) {
            Ok(key) => {
                let kind = key.kind();
                debug!(curve = %self.curve, %kind, "imported key");
                self.key = Some(key);
                Ok(kind)
            }
            Err(e) => {
                warn!(curve = %self.curve, status = %e.status(), "key import rejected");
                Err(e)
            }
        }
    }

    /// Container length for exporting `kind`
    ///
    /// InvalidParameter if the slot holds no key of that kind.
    pub fn exported_len(&self, kind: KeyKind) -> Result<usize> {
        self.key_for(kind, "exported_key_len")?;
        Ok(match kind {
            KeyKind::Private => adapter::encoded_private_len(self.curve),
            KeyKind::Public => adapter::encoded_public_len(self.curve),
        })
    }

    /// Encode the held key as a container of `kind` into `out`
    pub fn export_into(&self, kind: KeyKind, out: &mut [u8]) -> Result<usize> {
        let key = self.key_for(kind, "export_key")?;
        adapter::encode_into(key, kind, out)
    }

    fn key_for(&self, kind: KeyKind, context: &'static str) -> Result<&EngineKey> {
        match kind {
            KeyKind::Private => self.private_key(context),
            KeyKind::Public => self.any_key(context),
        }
    }
}
