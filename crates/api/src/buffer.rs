//! Two-phase output buffer protocol
//!
//! Operations that produce variable-length output take a caller buffer and
//! return the number of bytes written. Called with a buffer that is too
//! short (typically empty) they fail with `BufferTooSmall` carrying the exact
//! size needed. The helpers here drive that protocol for callers that just
//! want an owned vector.

use crate::error::{Error, Result};
use zeroize::Zeroizing;

/// Run `fill` once to learn the size, allocate, then run it again to fill
///
/// The allocation is fallible: an unsatisfiable reservation is reported as
/// `NoMemory` instead of aborting.
pub fn query_and_fill<F>(context: &'static str, fill: F) -> Result<Vec<u8>>
where
    F: FnMut(&mut [u8]) -> Result<usize>,
{
    query_and_fill_secret(context, fill).map(|secret| secret.to_vec())
}

/// Same as [`query_and_fill`], for outputs that must be wiped on drop
pub fn query_and_fill_secret<F>(context: &'static str, mut fill: F) -> Result<Zeroizing<Vec<u8>>>
where
    F: FnMut(&mut [u8]) -> Result<usize>,
{
    let required = match fill(&mut []) {
        Ok(_) => return Ok(Zeroizing::new(Vec::new())),
        Err(Error::BufferTooSmall { required, .. }) => required,
        Err(e) => return Err(e),
    };

    let mut out = Zeroizing::new(Vec::new());
    out.try_reserve_exact(required)
        .map_err(|_| Error::NoMemory { context })?;
    out.resize(required, 0);

    let written = fill(out.as_mut_slice())?;
    out.truncate(written);
    Ok(out)
}
