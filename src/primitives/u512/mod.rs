//! 512-bit unsigned integer primitive
//!
//! This module defines the `U512` type, a fixed-size 512-bit unsigned
//! integer. It carries full products of two `U256` values and 64-byte
//! big-endian inputs (such as wide random draws) before they are reduced
//! by a modulus.
//!
//! The internal representation is big-endian and remains stable across
//! all operations and conversions.

mod conv;
mod core;

/// Fixed-size 512-bit unsigned integer.
pub use self::core::U512;
