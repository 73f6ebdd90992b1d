//! Signature contexts
//!
//! [`SignContext`] reuses the key slot and container handling of the key
//! agreement context for ECDSA, so a key exported from one kind of context
//! can be imported into the other.

pub mod ecdsa;

pub use ecdsa::SignContext;
