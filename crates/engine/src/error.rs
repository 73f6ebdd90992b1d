//! Translation of backend errors into the facade status model

use keyagree_api::Error;
use thiserror::Error as ThisError;

/// Errors raised by the RustCrypto backend
///
/// These never leave the engine crate; [`BackendError::into_api`] turns them
/// into the facade [`Error`] before returning.
#[derive(Debug, ThisError)]
pub(crate) enum BackendError {
    /// Point or scalar rejected by the curve arithmetic
    #[error("curve arithmetic rejected the input")]
    Curve(#[from] elliptic_curve::Error),

    /// ECDSA signing or verification failure
    #[error("signature operation failed")]
    Signature(#[from] p256::ecdsa::Error),
}

impl BackendError {
    /// Curve rejections become Fail, signature failures InvalidSignature
    pub(crate) fn into_api(self, context: &'static str) -> Error {
        match self {
            Self::Curve(_) => Error::fail(context, "backend rejected key material"),
            Self::Signature(_) => Error::InvalidSignature { context },
        }
    }
}

/// Map a backend result into the facade result type
pub(crate) trait BackendResultExt<T> {
    fn backend(self, context: &'static str) -> keyagree_api::Result<T>;
}

impl<T, E> BackendResultExt<T> for Result<T, E>
where
    E: Into<BackendError>,
{
    fn backend(self, context: &'static str) -> keyagree_api::Result<T> {
        self.map_err(|e| e.into().into_api(context))
    }
}
