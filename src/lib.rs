//! # keyagree
//!
//! Elliptic-curve key agreement and signatures behind a backend-agnostic
//! facade, with keys exchanged as self-describing binary key containers.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! keyagree = "0.3"
//! ```
//!
//! ```
//! use keyagree::prelude::*;
//!
//! let mut h1 = KeyAgreement::create(KeyAgreementAlgorithm::EcP256)?;
//! let mut h2 = KeyAgreement::create(KeyAgreementAlgorithm::EcP256)?;
//! h1.generate_key()?;
//! h2.generate_key()?;
//!
//! let c1 = h1.export_key(KeyKind::Public)?;
//! let c2 = h2.export_key(KeyKind::Public)?;
//! assert_eq!(h1.derive(&c2)?, h2.derive(&c1)?);
//! # Ok::<(), keyagree::Error>(())
//! ```
//!
//! ## Features
//!
//! - `agreement` (default): the ECDH [`KeyAgreement`](agreement::KeyAgreement) context
//! - `sign` (default): the ECDSA [`SignContext`](sign::SignContext) context
//! - `secp256k1` (default): secp256k1 backend in addition to P-256
//! - `serde`: `Serialize`/`Deserialize` for statuses and identifiers
//! - `full`: all of the above
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `keyagree-api`: status model, errors, identifiers and context traits
//! - `keyagree-container`: binary key container format
//! - `keyagree-engine`: adapter between containers and the elliptic-curve backend
//! - `keyagree-agreement`: ECDH key agreement context
//! - `keyagree-sign`: ECDSA signature context

// Core re-exports (always available)
pub use keyagree_api as api;
pub use keyagree_container as container;
pub use keyagree_engine as engine;
pub use keyagree_internal as internal;
pub use keyagree_params as params;

// Feature-gated re-exports
#[cfg(feature = "agreement")]
pub use keyagree_agreement as agreement;

#[cfg(feature = "sign")]
pub use keyagree_sign as sign;

pub use api::{status_of, Error, Result, Status};

// Entropy and wiping types that appear in the public API
pub use rand;
pub use zeroize;

/// Common imports for keyagree users
pub mod prelude {
    // Status model
    pub use crate::api::{status_of, Error, Result, Status};

    // Identifiers
    pub use crate::api::{Curve, KeyAgreementAlgorithm, KeyKind, SignatureAlgorithm};

    // Context traits
    pub use crate::api::{Agreement, KeyContext, Signing};

    pub use zeroize::Zeroizing;

    #[cfg(feature = "agreement")]
    pub use crate::agreement::KeyAgreement;

    #[cfg(feature = "sign")]
    pub use crate::sign::SignContext;
}
