//! Primitive types
//!
//! This module defines the fixed-size integers the curve arithmetic is
//! built from.
//!
//! Primitives are simple, fixed-size building blocks with well-defined
//! semantics. They are intentionally minimal and do not attempt to
//! replicate a full-featured big-integer library: modular arithmetic is
//! layered on top of them in `crate::arith`.
//!
//! Current primitives include:
//! - `U256`: a fixed-size 256-bit unsigned integer
//! - `U512`: a fixed-size 512-bit unsigned integer

pub(crate) mod limbs;
mod u256;
mod u512;

/// Fixed-size unsigned integer primitives.
pub use u256::U256;
pub use u512::U512;
