//! Edwards25519 group arithmetic.
//!
//! This module implements the twisted Edwards curve
//!
//! ```text
//! −x² + y² = 1 + d·x²·y²
//! ```
//!
//! over 𝔽ₘ with `M = 2²⁵⁵ − 19`, in extended coordinates.
//!
//! ## Contents
//!
//! - `constants`: field prime, group order, `a`, `d` and the base point
//! - [`Point`]: addition, doubling, negation, projective equality and
//!   opt-in validation
//! - scalar multiplication (`Point::multiply`, `P * &k`)
//! - [`Scalar`]: integers modulo the group order
//! - the raw 64-byte `x ‖ y` point encoding
//!
//! ## Security properties
//!
//! None of the arithmetic is constant-time, and points are not checked
//! for curve or subgroup membership unless the caller asks for it.

pub mod codec;
pub mod constants;
mod point;
mod scalar;
mod scalar_mul;

pub use codec::ENCODED_LEN;
pub use point::Point;
pub use scalar::Scalar;
