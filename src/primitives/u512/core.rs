//! 512-bit unsigned integer primitive
//!
//! The value is stored as 64 bytes in big-endian order.

use std::fmt::{Display, Formatter, Result};

use crate::primitives::limbs::WideLimbs;

/// Fixed-size 512-bit unsigned integer.
///
/// The value is stored as 64 bytes in **big-endian** order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U512(pub(crate) [u8; 64]);

impl U512 {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; 64]);

    /// The maximum representable value (2⁵¹² − 1).
    pub const MAX: Self = Self([255u8; 64]);

    /// Builds a value from 64 big-endian bytes.
    pub const fn from_be_bytes(bytes: [u8; 64]) -> Self {
        U512(bytes)
    }

    /// Returns the 64-byte big-endian encoding.
    pub const fn to_be_bytes(&self) -> [u8; 64] {
        self.0
    }

    pub(crate) fn from_limbs(limbs: WideLimbs) -> Self {
        let mut out = [0u8; 64];

        for (i, limb) in limbs.iter().enumerate() {
            let base = 56 - 8 * i;
            out[base..base + 8].copy_from_slice(&limb.to_be_bytes());
        }

        U512(out)
    }

    pub(crate) fn to_limbs(&self) -> WideLimbs {
        let mut limbs = [0u64; 8];

        for (i, limb) in limbs.iter_mut().enumerate() {
            let base = 56 - 8 * i;
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(&self.0[base..base + 8]);
            *limb = u64::from_be_bytes(bytes);
        }

        limbs
    }

    /// Counts the number of leading zero bits in the integer.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &byte in self.0.iter() {
            if byte == 0 {
                count += 8;
            } else {
                count += byte.leading_zeros();
                return count;
            }
        }

        count
    }
}

impl Display for U512 {
    /// Formats the value as a colon-separated hexadecimal string.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }

            write!(f, "{:02X}", byte)?;
        }

        Ok(())
    }
}

/// Manual `Default`: arrays longer than 32 elements do not derive it
/// on every supported toolchain.
impl Default for U512 {
    fn default() -> Self {
        U512::ZERO
    }
}
