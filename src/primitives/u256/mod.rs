//! 256-bit unsigned integer primitive
//!
//! This module defines the `U256` type, a fixed-size 256-bit unsigned
//! integer used for curve coordinates, scalars and moduli.
//!
//! `U256` is a plain value type: it offers comparisons, shifts, bit access
//! and conversions, while modular arithmetic lives in `crate::arith`.
//!
//! The internal representation is big-endian and remains stable across
//! all operations and conversions.

mod conv;
mod core;
mod ops;

/// Fixed-size 256-bit unsigned integer.
pub use self::core::U256;
