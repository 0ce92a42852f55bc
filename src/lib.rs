//! Edwards25519 point arithmetic
//!
//! This crate provides a small, explicit arithmetic engine for the twisted
//! Edwards curve used by Ed25519. It is a building block for key
//! generation and Diffie–Hellman style shared-secret derivation.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on speed or side-channel resistance.
//!
//! # Module overview
//!
//! - `primitives`
//!   Fixed-size `U256` and `U512` integers stored big-endian, with the
//!   conversions, shifts and bit access the curve code needs.
//!
//! - `arith`
//!   Modular arithmetic: reduction and inversion modulo any non-zero
//!   modulus (`Modulus`), and fast arithmetic in the field 𝔽ₘ with
//!   `M = 2²⁵⁵ − 19` (`FieldElement`).
//!
//! - `curve`
//!   Curve constants, points in extended coordinates `(X : Y : Z : T)`,
//!   addition, doubling, negation, double-and-add scalar multiplication,
//!   scalars modulo the group order, and the raw 64-byte `x ‖ y` point
//!   encoding.
//!
//! - `keys`
//!   Key material: a private scalar (or an explicit public-only marker)
//!   paired with its public point, random key generation from a pluggable
//!   entropy source, and Diffie–Hellman agreement.
//!
//! - `error`
//!   The crate-wide error type.
//!
//! # Known gaps
//!
//! - Nothing is constant-time. Scalar multiplication branches on scalar
//!   bits.
//! - Arithmetic does not validate that points lie on the curve or in the
//!   prime-order subgroup; `Point::validate` is available for untrusted
//!   input.
//! - The point encoding is a raw 64-byte form, not the standard 32-byte
//!   compressed Ed25519 encoding.
//!
//! # Example
//!
//! ```
//! use edcurve::keys::Key;
//!
//! let alice = Key::generate()?;
//! let bob = Key::generate()?;
//!
//! let a = alice.shared_secret(bob.public())?;
//! let b = bob.shared_secret(alice.public())?;
//! assert_eq!(a, b);
//! # Ok::<(), edcurve::Error>(())
//! ```

mod os;

pub mod arith;
pub mod curve;
pub mod error;
pub mod keys;
pub mod primitives;

pub use curve::{Point, Scalar};
pub use error::{Error, Result};
pub use keys::Key;
