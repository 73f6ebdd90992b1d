//! Constants for Elliptic Curve Diffie-Hellman

/// Size of shared secret for ECDH using P-256 in bytes (x-coordinate)
pub const ECDH_P256_SHARED_SECRET_SIZE: usize = 32;

/// Size of public key for ECDH using P-256 in bytes (compressed format)
pub const ECDH_P256_PUBLIC_KEY_SIZE: usize = 33;

/// Size of private key for ECDH using P-256 in bytes
pub const ECDH_P256_PRIVATE_KEY_SIZE: usize = 32;

/// Size of shared secret for ECDH using secp256k1 in bytes (x-coordinate)
pub const ECDH_SECP256K1_SHARED_SECRET_SIZE: usize = 32;

/// Size of public key for ECDH using secp256k1 in bytes (compressed format)
pub const ECDH_SECP256K1_PUBLIC_KEY_SIZE: usize = 33;

/// Size of private key for ECDH using secp256k1 in bytes
pub const ECDH_SECP256K1_PRIVATE_KEY_SIZE: usize = 32;
