//! Public API traits and types for the keyagree library
//!
//! This crate is the backend-agnostic surface of the workspace: the closed
//! [`Status`] set every operation reports, the [`Error`] type carrying it,
//! algorithm and curve identifiers, and the traits implemented by each
//! primitive context.

pub mod buffer;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{status_of, Error, Result, Status};
pub use types::*;

// Re-export all traits from the traits module
pub use traits::{Agreement, KeyContext, Signing};
