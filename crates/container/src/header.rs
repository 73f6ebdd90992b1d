//! Generic container header and framing

use keyagree_api::error::{validate, Error, Result};
use keyagree_internal::constant_time::ct_eq_u32;
use keyagree_internal::{endian, Crc32c};
use keyagree_params::container::{CRC_OFFSET, HEADER_LEN, SIZE_OFFSET, TAG_LEN};

/// Container tag bytes
pub type Tag = [u8; TAG_LEN];

/// Decoded container header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    tag: Tag,
    size: u32,
    crc: u32,
}

impl ContainerHeader {
    /// Read the header fields from the front of `bytes`
    ///
    /// Fails with InvalidParameter if `bytes` is shorter than the header.
    /// Nothing past the header is inspected.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        const CONTEXT: &str = "ContainerHeader::parse";
        validate::min_length(CONTEXT, bytes.len(), HEADER_LEN)?;

        let tag: Tag = bytes[..TAG_LEN].try_into()?;
        let size = endian::read_u32_be(bytes, SIZE_OFFSET)
            .ok_or_else(|| Error::invalid_parameter(CONTEXT, "size field out of range"))?;
        let crc = endian::read_u32_be(bytes, CRC_OFFSET)
            .ok_or_else(|| Error::invalid_parameter(CONTEXT, "crc field out of range"))?;

        Ok(Self { tag, size, crc })
    }

    /// Tag bytes
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Declared total container length, header included
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Stored checksum
    pub fn crc(&self) -> u32 {
        self.crc
    }
}

/// A framed container whose size and checksum have been verified
#[derive(Debug, Clone, Copy)]
pub struct Container<'a> {
    header: ContainerHeader,
    bytes: &'a [u8],
}

impl<'a> Container<'a> {
    /// Validate framing of `bytes`
    ///
    /// - shorter than the header: InvalidParameter
    /// - declared size differs from the buffer length: InvalidParameter
    /// - checksum mismatch: DataCorrupt
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        const CONTEXT: &str = "Container::parse";
        let header = ContainerHeader::parse(bytes)?;

        if header.size() != bytes.len() {
            return Err(Error::invalid_parameter(
                CONTEXT,
                format!(
                    "declared size {} does not match buffer length {}",
                    header.size(),
                    bytes.len()
                ),
            ));
        }

        if !ct_eq_u32(checksum(bytes), header.crc()) {
            return Err(Error::data_corrupt(CONTEXT, "checksum mismatch"));
        }

        Ok(Self { header, bytes })
    }

    /// Verified header
    pub fn header(&self) -> &ContainerHeader {
        &self.header
    }

    /// Tag bytes
    pub fn tag(&self) -> Tag {
        self.header.tag()
    }

    /// Bytes following the header
    pub fn payload(&self) -> &'a [u8] {
        &self.bytes[HEADER_LEN..]
    }

    /// The whole container
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

/// Read the tag of a container after the header bounds check
pub fn peek_tag(bytes: &[u8]) -> Result<Tag> {
    ContainerHeader::parse(bytes).map(|header| header.tag())
}

/// Total container length for a payload of `payload_len` bytes
pub const fn encoded_len(payload_len: usize) -> usize {
    HEADER_LEN + payload_len
}

/// Frame a payload produced by `fill` into `out`
///
/// `fill` receives exactly `payload_len` bytes to write. On success returns
/// the total number of bytes written. Fails with BufferTooSmall (carrying the
/// total length) before calling `fill` when `out` is too short.
pub fn write_with<F>(tag: Tag, payload_len: usize, out: &mut [u8], fill: F) -> Result<usize>
where
    F: FnOnce(&mut [u8]) -> Result<()>,
{
    const CONTEXT: &str = "container::write";
    let total = encoded_len(payload_len);
    let size = u32::try_from(total)
        .map_err(|_| Error::invalid_parameter(CONTEXT, "payload too large for a container"))?;
    validate::buffer(CONTEXT, out.len(), total)?;

    let out = &mut out[..total];
    fill(&mut out[HEADER_LEN..])?;

    out[..TAG_LEN].copy_from_slice(&tag);
    endian::write_u32_be(out, SIZE_OFFSET, size)
        .and_then(|_| endian::write_u32_be(out, CRC_OFFSET, 0))
        .ok_or_else(|| Error::fail(CONTEXT, "header field out of range"))?;
    let crc = checksum(out);
    endian::write_u32_be(out, CRC_OFFSET, crc)
        .ok_or_else(|| Error::fail(CONTEXT, "header field out of range"))?;

    Ok(total)
}

/// Frame `payload` into `out`
pub fn write(tag: Tag, payload: &[u8], out: &mut [u8]) -> Result<usize> {
    write_with(tag, payload.len(), out, |dst| {
        dst.copy_from_slice(payload);
        Ok(())
    })
}

/// CRC-32C of `container` with its crc field treated as zero
///
/// Callers guarantee `container.len() >= HEADER_LEN`.
fn checksum(container: &[u8]) -> u32 {
    debug_assert!(container.len() >= HEADER_LEN);
    let mut crc = Crc32c::new();
    crc.update(&container[..CRC_OFFSET]);
    crc.update(&[0u8; 4]);
    crc.update(&container[HEADER_LEN..]);
    crc.finalize()
}
