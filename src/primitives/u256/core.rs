//! 256-bit unsigned integer primitive
//!
//! The value is stored as 32 bytes in big-endian order, which matches the
//! byte layout of the point encoding and keeps derived ordering correct.

use std::fmt::{Display, Formatter, LowerHex, Result};

use crate::primitives::U512;
use crate::primitives::limbs::{self, Limbs};

/// Fixed-size 256-bit unsigned integer.
///
/// The value is stored as 32 bytes in **big-endian** order.
///
/// This type intentionally exposes only the functionality required by the
/// curve arithmetic, favoring clarity and correctness over completeness.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U256(pub(crate) [u8; 32]);

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self([0u8; 32]);

    /// The value one.
    pub const ONE: Self = Self::one_be();

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self([255u8; 32]);

    /// Returns the value one encoded in big-endian form.
    ///
    /// This is a `const` constructor suitable for use in constant contexts.
    pub const fn one_be() -> Self {
        let mut out = [0u8; 32];
        out[31] = 1;
        U256(out)
    }

    /// Builds a value from 32 big-endian bytes.
    pub const fn from_be_bytes(bytes: [u8; 32]) -> Self {
        U256(bytes)
    }

    /// Returns the 32-byte big-endian encoding.
    pub const fn to_be_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Builds a value from little-endian `u64` limbs.
    pub(crate) const fn from_limbs(limbs: Limbs) -> Self {
        let mut out = [0u8; 32];
        let mut i = 0;

        while i < 4 {
            let bytes = limbs[i].to_be_bytes();
            let base = 24 - 8 * i;
            let mut j = 0;

            while j < 8 {
                out[base + j] = bytes[j];
                j += 1;
            }

            i += 1;
        }

        U256(out)
    }

    /// Splits the value into little-endian `u64` limbs.
    pub(crate) const fn to_limbs(&self) -> Limbs {
        let mut limbs = [0u64; 4];
        let mut i = 0;

        while i < 4 {
            let base = 24 - 8 * i;
            let mut bytes = [0u8; 8];
            let mut j = 0;

            while j < 8 {
                bytes[j] = self.0[base + j];
                j += 1;
            }

            limbs[i] = u64::from_be_bytes(bytes);
            i += 1;
        }

        limbs
    }

    /// Counts the number of leading zero bits in the integer.
    ///
    /// # Returns
    /// The number of leading zero bits in the range `0..=256`.
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

    /// Number of significant bits (`0` for zero).
    pub fn bits(&self) -> u32 {
        256 - self.leading_zeros()
    }

    /// Returns bit `index`, counting from the least significant bit.
    ///
    /// Indices of 256 and above read as zero.
    pub fn bit(&self, index: u32) -> bool {
        if index >= 256 {
            return false;
        }

        let byte = self.0[31 - (index / 8) as usize];
        (byte >> (index % 8)) & 1 == 1
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    pub fn is_odd(&self) -> bool {
        self.0[31] & 1 == 1
    }

    /// Addition that returns `None` on overflow past 2²⁵⁶ − 1.
    pub fn checked_add(self, rhs: U256) -> Option<U256> {
        let (sum, carry) = limbs::add(&self.to_limbs(), &rhs.to_limbs());

        (carry == 0).then(|| U256::from_limbs(sum))
    }

    /// Full product of two 256-bit values.
    pub fn widening_mul(&self, rhs: &U256) -> U512 {
        U512::from_limbs(limbs::mul_wide(&self.to_limbs(), &rhs.to_limbs()))
    }
}

impl Display for U256 {
    /// Formats the value as a colon-separated hexadecimal string.
    ///
    /// Each byte is printed as two uppercase hexadecimal characters,
    /// separated by `:` for readability.
    ///
    /// Example:
    /// `00:1F:A4:...`
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

impl LowerHex for U256 {
    /// Formats the value as 64 lowercase hexadecimal digits.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if f.alternate() {
            f.write_str("0x")?;
        }

        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}
