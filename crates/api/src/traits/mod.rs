//! Traits implemented by the primitive contexts
//!
//! A primitive context owns one backend key slot for one algorithm and
//! exposes generate/import/export on it ([`KeyContext`]). Operation-specific
//! traits build on that: [`Agreement`] for shared-secret derivation and
//! [`Signing`] for signatures.

pub mod agreement;
pub mod context;
pub mod signing;

pub use agreement::Agreement;
pub use context::KeyContext;
pub use signing::Signing;
