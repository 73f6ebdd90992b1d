//! Status and error type definitions

use std::string::String;
use thiserror::Error as ThisError;

/// Outcome of a facade operation
///
/// This is a closed set. Successful operations report [`Status::Success`];
/// a failed operation reports exactly one of the other values, obtained from
/// [`Error::status`]. The numeric codes are stable and may cross FFI or wire
/// boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum Status {
    /// The operation completed
    Success = 0,
    /// The backend rejected the request
    Fail = 11,
    /// Malformed or inconsistent caller input
    InvalidParameter = 12,
    /// An allocation could not be satisfied
    NoMemory = 13,
    /// The output buffer is too short; retry with the reported size
    BufferTooSmall = 14,
    /// A container failed its integrity check
    DataCorrupt = 15,
    /// A signature did not verify
    InvalidSignature = 16,
}

impl Status {
    /// Stable numeric code of this status
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Look up a status by its numeric code
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            11 => Some(Self::Fail),
            12 => Some(Self::InvalidParameter),
            13 => Some(Self::NoMemory),
            14 => Some(Self::BufferTooSmall),
            15 => Some(Self::DataCorrupt),
            16 => Some(Self::InvalidSignature),
            _ => None,
        }
    }

    /// True only for [`Status::Success`]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Success => "success",
            Self::Fail => "fail",
            Self::InvalidParameter => "invalid parameter",
            Self::NoMemory => "no memory",
            Self::BufferTooSmall => "buffer too small",
            Self::DataCorrupt => "data corrupt",
            Self::InvalidSignature => "invalid signature",
        };
        f.write_str(name)
    }
}

/// Primary error type for facade operations
///
/// `context` names the operation that failed. Messages are intentionally
/// coarse: they describe which check tripped, never key material or backend
/// internals.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The backend rejected the request
    #[error("{context}: operation failed: {message}")]
    Fail {
        context: &'static str,
        message: String,
    },

    /// Malformed or inconsistent caller input
    #[error("{context}: invalid parameter: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Allocation failure
    #[error("{context}: out of memory")]
    NoMemory { context: &'static str },

    /// Output buffer too short; `required` is the exact size to retry with
    #[error("{context}: buffer too small (required {required} bytes, got {actual})")]
    BufferTooSmall {
        context: &'static str,
        required: usize,
        actual: usize,
    },

    /// Container checksum mismatch
    #[error("{context}: data corrupt: {message}")]
    DataCorrupt {
        context: &'static str,
        message: String,
    },

    /// Signature verification failed
    #[error("{context}: invalid signature")]
    InvalidSignature { context: &'static str },
}

/// Result type for facade operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Backend rejection
    pub fn fail(context: &'static str, message: impl Into<String>) -> Self {
        Self::Fail {
            context,
            message: message.into(),
        }
    }

    /// Malformed caller input
    pub fn invalid_parameter(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Integrity check failure
    pub fn data_corrupt(context: &'static str, message: impl Into<String>) -> Self {
        Self::DataCorrupt {
            context,
            message: message.into(),
        }
    }

    /// Output buffer too short
    pub fn buffer_too_small(context: &'static str, required: usize, actual: usize) -> Self {
        Self::BufferTooSmall {
            context,
            required,
            actual,
        }
    }

    /// The closed status this error reports
    pub fn status(&self) -> Status {
        match self {
            Self::Fail { .. } => Status::Fail,
            Self::InvalidParameter { .. } => Status::InvalidParameter,
            Self::NoMemory { .. } => Status::NoMemory,
            Self::BufferTooSmall { .. } => Status::BufferTooSmall,
            Self::DataCorrupt { .. } => Status::DataCorrupt,
            Self::InvalidSignature { .. } => Status::InvalidSignature,
        }
    }

    /// Size to retry with, for [`Error::BufferTooSmall`]
    pub fn required_len(&self) -> Option<usize> {
        match self {
            Self::BufferTooSmall { required, .. } => Some(*required),
            _ => None,
        }
    }

    /// Name of the operation that failed
    pub fn context(&self) -> &'static str {
        match self {
            Self::Fail { context, .. }
            | Self::InvalidParameter { context, .. }
            | Self::NoMemory { context }
            | Self::BufferTooSmall { context, .. }
            | Self::DataCorrupt { context, .. }
            | Self::InvalidSignature { context } => context,
        }
    }

    /// Replace the context label, keeping the status and details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::Fail { message, .. } => Self::Fail { context, message },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::NoMemory { .. } => Self::NoMemory { context },
            Self::BufferTooSmall {
                required, actual, ..
            } => Self::BufferTooSmall {
                context,
                required,
                actual,
            },
            Self::DataCorrupt { message, .. } => Self::DataCorrupt { context, message },
            Self::InvalidSignature { .. } => Self::InvalidSignature { context },
        }
    }
}

/// Collapse a result into the status it reports
pub fn status_of<T>(result: &Result<T>) -> Status {
    match result {
        Ok(_) => Status::Success,
        Err(e) => e.status(),
    }
}
