//! Integer conversion utilities
//!
//! This module groups explicit conversion implementations between the
//! fixed-size `U256` primitive and native integers, byte arrays and
//! textual literals.
//!
//! Each submodule is responsible for conversions to and from a specific
//! representation, following these principles:
//! - explicit big-endian semantics
//! - no implicit truncation
//! - fallible conversions when narrowing may lose information

mod text;
mod u128;
mod u32;
mod u64;
mod u8;
