//! Conversions between `U512`, byte arrays and `U256`.

use crate::error::{Error, Result};
use crate::primitives::{U256, U512};

/// Converts a 64-byte array into a `U512`.
///
/// The input is interpreted as a big-endian 512-bit value.
impl From<[u8; 64]> for U512 {
    fn from(value: [u8; 64]) -> Self {
        U512(value)
    }
}

/// Converts a `U512` into a 64-byte big-endian array.
impl From<U512> for [u8; 64] {
    fn from(value: U512) -> Self {
        value.0
    }
}

/// Converts a `U256` into a `U512`.
///
/// The 256-bit value is placed in the least significant half of the
/// 512-bit integer, with the upper 256 bits set to zero.
impl From<U256> for U512 {
    fn from(value: U256) -> Self {
        let mut out = [0u8; 64];
        out[32..].copy_from_slice(&value.0);
        U512(out)
    }
}

/// Attempts to convert a `U512` into a `U256`.
///
/// The conversion succeeds only if the upper 256 bits of the value are zero.
impl TryFrom<U512> for U256 {
    type Error = Error;

    fn try_from(value: U512) -> Result<Self> {
        if value.0[..32].iter().any(|&b| b != 0) {
            return Err(Error::Overflow);
        }

        let mut out = [0u8; 32];
        out.copy_from_slice(&value.0[32..]);

        Ok(U256(out))
    }
}
