//! Error handling for the keyagree facade
//!
//! Every operation in the workspace returns [`Result`]. The error variants map
//! one-to-one onto the closed [`Status`] set; backend error types are
//! translated at the adapter boundary and never appear here.

pub mod traits;
pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{status_of, Error, Result, Status};

// Re-export error traits
pub use traits::ResultExt;

// Re-export validation utilities module
pub use validate as validation;

impl From<std::collections::TryReserveError> for Error {
    fn from(_: std::collections::TryReserveError) -> Self {
        Self::NoMemory {
            context: "allocation",
        }
    }
}

impl From<core::array::TryFromSliceError> for Error {
    fn from(_: core::array::TryFromSliceError) -> Self {
        Self::InvalidParameter {
            context: "array conversion",
            message: "slice has the wrong length".into(),
        }
    }
}
