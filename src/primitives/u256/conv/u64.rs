//! Conversions between `U256` and `u64`.

use crate::error::{Error, Result};
use crate::primitives::U256;

/// Converts a `u64` into a `U256`.
///
/// The value is placed in the least significant 64 bits.
impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        U256::from_limbs([value, 0, 0, 0])
    }
}

/// Attempts to convert a `U256` into a `u64`.
///
/// The conversion succeeds only if the upper 192 bits of the value are zero.
impl TryFrom<U256> for u64 {
    type Error = Error;

    fn try_from(value: U256) -> Result<Self> {
        let [low, rest @ ..] = value.to_limbs();

        if rest.iter().any(|&limb| limb != 0) {
            return Err(Error::Overflow);
        }

        Ok(low)
    }
}
