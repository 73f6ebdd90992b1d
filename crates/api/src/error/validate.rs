//! Validation helpers returning facade errors

use super::types::{Error, Result};

/// Fail with InvalidParameter unless `condition` holds
pub fn parameter(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::invalid_parameter(context, message));
    }
    Ok(())
}

/// Require at least `min` bytes of input
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::invalid_parameter(
            context,
            format!("input too short (need at least {min} bytes, got {actual})"),
        ));
    }
    Ok(())
}

/// Require exactly `expected` bytes of input
pub fn exact_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::invalid_parameter(
            context,
            format!("invalid length (expected {expected} bytes, got {actual})"),
        ));
    }
    Ok(())
}

/// Require an output buffer of at least `required` bytes
///
/// The returned error carries `required` so the caller can resize and retry.
pub fn buffer(context: &'static str, actual: usize, required: usize) -> Result<()> {
    if actual < required {
        return Err(Error::buffer_too_small(context, required, actual));
    }
    Ok(())
}
