//! Constant values for the keyagree library
//!
//! Sizes of curve encodings and the layout of the binary key container.

#![no_std]

pub mod container;
pub mod traditional;
