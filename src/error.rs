//! Error types for curve arithmetic, encoding and key handling.
//!
//! Every fallible operation in the crate returns [`Result`]. Errors fall
//! into two broad families:
//!
//! - **domain** errors: a mathematical operation has no defined result
//!   (a value without a modular inverse, a zero modulus);
//! - **format** errors: an input buffer or literal is malformed.
//!
//! Remaining variants cover opt-in point validation, key usage and the
//! operating system entropy source.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The value is congruent to zero or shares a factor with the modulus.
    #[error("value has no inverse modulo the given modulus")]
    NoInverse,

    /// A modulus of zero was supplied.
    #[error("modulus must be non-zero")]
    ZeroModulus,

    /// A buffer had the wrong length for the requested decoding.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A numeric literal contained a character outside its radix.
    #[error("invalid digit {0:?} in integer literal")]
    InvalidDigit(char),

    /// A numeric literal does not fit in the target width.
    #[error("integer literal overflows the target width")]
    Overflow,

    /// The point does not satisfy the curve equation.
    #[error("point is not on the curve")]
    NotOnCurve,

    /// The point lies outside the prime-order subgroup.
    #[error("point is not in the prime-order subgroup")]
    NotInSubgroup,

    /// A private-key operation was requested on a public-only key.
    #[error("key holds no private scalar")]
    MissingPrivateKey,

    /// The operating system entropy source failed.
    #[error("entropy source failure: {0}")]
    Entropy(String),
}

impl Error {
    /// Returns `true` for errors where the arithmetic has no defined result.
    pub fn is_domain(&self) -> bool {
        matches!(self, Error::NoInverse | Error::ZeroModulus)
    }

    /// Returns `true` for errors caused by malformed input encodings.
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            Error::InvalidLength { .. } | Error::InvalidDigit(_) | Error::Overflow
        )
    }
}
