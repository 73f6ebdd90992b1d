//! Constants for ECDSA

/// Size of a fixed-width (r || s) ECDSA P-256 signature in bytes
pub const ECDSA_P256_SIGNATURE_SIZE: usize = 64;

/// Size of a fixed-width (r || s) ECDSA secp256k1 signature in bytes
pub const ECDSA_SECP256K1_SIGNATURE_SIZE: usize = 64;
