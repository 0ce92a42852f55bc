//! Conversions between `U256` and 128-bit integers.

use crate::error::{Error, Result};
use crate::primitives::U256;

/// Converts a `u128` into a `U256`.
///
/// The value is placed in the least significant 128 bits of the 256-bit
/// integer, with the upper bits set to zero.
impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        let mut out = [0u8; 32];
        out[16..].copy_from_slice(&value.to_be_bytes());

        U256(out)
    }
}

/// Attempts to convert a `U256` into a `u128`.
///
/// The conversion succeeds only if the upper 128 bits of the value are zero.
impl TryFrom<U256> for u128 {
    type Error = Error;

    fn try_from(value: U256) -> Result<Self> {
        if value.0[..16].iter().any(|&b| b != 0) {
            return Err(Error::Overflow);
        }

        let mut buf = [0u8; 16];
        buf.copy_from_slice(&value.0[16..]);

        Ok(u128::from_be_bytes(buf))
    }
}
