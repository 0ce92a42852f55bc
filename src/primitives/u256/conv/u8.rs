//! Conversions between `U256` and byte representations
//!
//! All conversions preserve the internal big-endian representation of
//! `U256` and avoid implicit truncation.

use crate::error::{Error, Result};
use crate::primitives::U256;

impl U256 {
    /// Builds a value from a big-endian slice of at most 32 bytes.
    ///
    /// Shorter inputs are left-padded with zeros.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > 32 {
            return Err(Error::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }

        let mut out = [0u8; 32];
        out[32 - bytes.len()..].copy_from_slice(bytes);

        Ok(U256(out))
    }
}

/// Converts a `U256` into a 32-byte array.
///
/// The returned array represents the value in big-endian order.
impl From<U256> for [u8; 32] {
    fn from(value: U256) -> Self {
        value.0
    }
}

/// Converts a 32-byte array into a `U256`.
///
/// The input is interpreted as a big-endian 256-bit value.
impl From<[u8; 32]> for U256 {
    fn from(value: [u8; 32]) -> Self {
        U256(value)
    }
}

/// Attempts to convert a `U256` into a `u8`.
///
/// The conversion succeeds only if the upper 248 bits of the value are zero.
impl TryFrom<U256> for u8 {
    type Error = Error;

    fn try_from(value: U256) -> Result<Self> {
        let (high, low) = value.0.split_at(31);

        if high.iter().any(|&b| b != 0) {
            return Err(Error::Overflow);
        }

        Ok(low[0])
    }
}

/// Converts a `u8` into a `U256`.
impl From<u8> for U256 {
    fn from(value: u8) -> Self {
        let mut out = [0u8; 32];
        out[31] = value;
        U256(out)
    }
}

/// Borrows the underlying 32-byte array of a `U256`.
impl AsRef<[u8; 32]> for U256 {
    fn as_ref(&self) -> &[u8; 32] {
        &self.0
    }
}
