//! Conversions between `U256` and `u32`.

use crate::error::{Error, Result};
use crate::primitives::U256;

/// Converts a `u32` into a `U256`.
///
/// The value is placed in the least significant 32 bits.
impl From<u32> for U256 {
    fn from(value: u32) -> Self {
        let mut out = [0u8; 32];
        out[28..].copy_from_slice(&value.to_be_bytes());
        U256(out)
    }
}

/// Attempts to convert a `U256` into a `u32`.
///
/// The conversion succeeds only if the upper 224 bits of the value are zero.
impl TryFrom<U256> for u32 {
    type Error = Error;

    fn try_from(value: U256) -> Result<Self> {
        if value.0[..28].iter().any(|&b| b != 0) {
            return Err(Error::Overflow);
        }

        let mut buf = [0u8; 4];
        buf.copy_from_slice(&value.0[28..]);

        Ok(u32::from_be_bytes(buf))
    }
}
