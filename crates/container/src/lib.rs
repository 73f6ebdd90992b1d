//! Binary key containers
//!
//! A container is a 12-byte header followed by a payload:
//!
//! ```text
//! +---------+---------------+---------------+-----------------+
//! | tag [4] | size u32 (BE) | crc32c (BE)   | payload ...     |
//! +---------+---------------+---------------+-----------------+
//! ```
//!
//! `size` counts the whole container including the header. `crc32c` covers
//! the whole container with the crc field itself zeroed. The tag describes
//! the payload; for elliptic-curve keys see [`ec_key`].
//!
//! Every parser in this crate checks that the buffer is at least header-sized
//! before reading any header field, the tag included.

pub mod ec_key;
pub mod header;

pub use ec_key::{EcKeyContainer, EcKeyTag};
pub use header::{Container, ContainerHeader, Tag};
pub use keyagree_params::container::HEADER_LEN;
