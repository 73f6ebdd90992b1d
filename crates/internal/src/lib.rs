//! Internal utilities for the keyagree library
//!
//! Nothing in here is part of the public contract; the other workspace crates
//! use these helpers for byte-level work on containers.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constant_time;
pub mod crc32c;
pub mod endian;

pub use constant_time::ct_eq;
pub use crc32c::Crc32c;
