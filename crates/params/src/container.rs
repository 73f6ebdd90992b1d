//! Layout of the binary key container header

/// Length of the container tag in bytes
pub const TAG_LEN: usize = 4;

/// Offset of the big-endian total-size field
pub const SIZE_OFFSET: usize = TAG_LEN;

/// Offset of the big-endian CRC-32C field
pub const CRC_OFFSET: usize = SIZE_OFFSET + 4;

/// Total header length: tag, size, crc
pub const HEADER_LEN: usize = CRC_OFFSET + 4;

/// First tag byte of a private key container
pub const PRIVATE_KEY_PREFIX: u8 = b'R';

/// First tag byte of a public key container
pub const PUBLIC_KEY_PREFIX: u8 = b'U';

/// Tag bytes 1..3 shared by every elliptic-curve key container
pub const EC_FAMILY: [u8; 2] = *b"EC";

/// Curve code (tag byte 3) for NIST P-256
pub const CURVE_CODE_P256: u8 = b'2';

/// Curve code (tag byte 3) for secp256k1
pub const CURVE_CODE_SECP256K1: u8 = b'K';
