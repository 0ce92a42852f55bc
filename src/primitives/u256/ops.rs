//! Arithmetic and bitwise operations for `U256`
//!
//! Only the operations needed by the curve code are provided:
//! - wrapping addition and subtraction (modulo 2²⁵⁶)
//! - logical shifts by a bit count
//! - bitwise AND
//!
//! The internal representation is big-endian.

use crate::primitives::limbs;
use crate::primitives::u256::U256;

use std::ops::{Add, BitAnd, Shl, Shr, Sub};

/// Bitwise AND between two 256-bit values.
impl BitAnd<U256> for U256 {
    type Output = U256;

    fn bitand(self, rhs: U256) -> Self::Output {
        let mut out = [0u8; 32];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l & r);

        U256(out)
    }
}

/// Logical left shift (`<<`) by a bit count.
///
/// Shifts greater than or equal to 256 bits yield zero.
impl Shl<u32> for U256 {
    type Output = U256;

    fn shl(self, shift: u32) -> Self::Output {
        if shift == 0 {
            return self;
        }
        if shift >= 256 {
            return U256::ZERO;
        }

        let byte_shift = (shift / 8) as usize;
        let bit_shift = shift % 8;

        let mut tmp = [0u8; 32];
        tmp[..(32 - byte_shift)].copy_from_slice(&self.0[byte_shift..]);

        if bit_shift == 0 {
            return U256(tmp);
        }

        let mut out = [0u8; 32];
        let mut carry = 0u8;

        for i in (0..32).rev() {
            let val = tmp[i];

            out[i] = (val << bit_shift) | carry;
            carry = val >> (8 - bit_shift);
        }

        U256(out)
    }
}

/// Logical right shift (`>>`) by a bit count.
///
/// Shifts greater than or equal to 256 bits yield zero.
impl Shr<u32> for U256 {
    type Output = U256;

    fn shr(self, shift: u32) -> Self::Output {
        if shift == 0 {
            return self;
        }
        if shift >= 256 {
            return U256::ZERO;
        }

        let byte_shift = (shift / 8) as usize;
        let bit_shift = shift % 8;

        let mut tmp = [0u8; 32];
        tmp[byte_shift..].copy_from_slice(&self.0[..(32 - byte_shift)]);

        if bit_shift == 0 {
            return U256(tmp);
        }

        let mut out = [0u8; 32];
        let mut carry = 0u8;

        for i in 0..32 {
            let val = tmp[i];

            out[i] = (val >> bit_shift) | carry;
            carry = val << (8 - bit_shift);
        }

        U256(out)
    }
}

/// Addition modulo 2²⁵⁶.
impl Add for U256 {
    type Output = U256;

    fn add(self, rhs: U256) -> Self::Output {
        U256::from_limbs(limbs::add(&self.to_limbs(), &rhs.to_limbs()).0)
    }
}

/// Subtraction modulo 2²⁵⁶.
impl Sub for U256 {
    type Output = U256;

    fn sub(self, rhs: U256) -> Self::Output {
        U256::from_limbs(limbs::sub(&self.to_limbs(), &rhs.to_limbs()).0)
    }
}
