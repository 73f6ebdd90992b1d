//! Key agreement contexts
//!
//! A [`KeyAgreement`] owns a single key slot bound to one
//! [`KeyAgreementAlgorithm`](keyagree_api::KeyAgreementAlgorithm) and derives
//! shared secrets with peers whose public keys arrive as binary key
//! containers.

pub mod ecdh;

pub use ecdh::{destroy, KeyAgreement};
