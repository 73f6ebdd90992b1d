//! Big-endian helpers for fixed-offset header fields
//!
//! Container headers store their integers in network byte order. Callers are
//! expected to have bounds-checked the buffer; the readers return `None` when
//! the slice is too short instead of panicking.

/// Read a big-endian u32 starting at `offset`
pub fn read_u32_be(bytes: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(4)?;
    let field = bytes.get(offset..end)?;
    Some(u32::from_be_bytes([field[0], field[1], field[2], field[3]]))
}

/// Write `value` as a big-endian u32 starting at `offset`
///
/// Returns `None` (leaving `bytes` untouched) if the field does not fit.
pub fn write_u32_be(bytes: &mut [u8], offset: usize, value: u32) -> Option<()> {
    let end = offset.checked_add(4)?;
    bytes.get_mut(offset..end)?.copy_from_slice(&value.to_be_bytes());
    Some(())
}
