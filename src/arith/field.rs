//! Arithmetic in the prime field 𝔽ₘ with `M = 2²⁵⁵ − 19`.
//!
//! Field elements are four little-endian `u64` limbs, always fully reduced
//! into `[0, M)`. Products are folded using `2²⁵⁶ ≡ 38` and
//! `2²⁵⁵ ≡ 19 (mod M)`, which avoids the bit-serial reduction used for
//! general moduli.
//!
//! This is variable-time code: the final conditional subtraction and the
//! inversion branch on the operand values.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::arith::Modulus;
use crate::curve::constants::FIELD_PRIME;
use crate::error::Result;
use crate::primitives::U256;
use crate::primitives::limbs::{self, Limbs, WideLimbs};

const P: Limbs = FIELD_PRIME.to_limbs();

/// An element of 𝔽ₘ.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldElement(pub(crate) Limbs);

impl FieldElement {
    /// The additive identity.
    pub const ZERO: Self = FieldElement([0, 0, 0, 0]);

    /// The multiplicative identity.
    pub const ONE: Self = FieldElement([1, 0, 0, 0]);

    /// Reduces an arbitrary 256-bit integer into the field.
    pub fn from_u256(value: &U256) -> Self {
        let mut r = value.to_limbs();

        // 2²⁵⁶ − 1 < 3M, so at most two subtractions are needed.
        while limbs::cmp(&r, &P).is_ge() {
            r = limbs::sub(&r, &P).0;
        }

        FieldElement(r)
    }

    /// Builds an element from limbs already known to be below `M`.
    pub(crate) const fn from_limbs_unchecked(limbs: Limbs) -> Self {
        FieldElement(limbs)
    }

    /// Returns the canonical integer representative in `[0, M)`.
    pub fn to_u256(&self) -> U256 {
        U256::from_limbs(self.0)
    }

    pub fn is_zero(&self) -> bool {
        limbs::is_zero(&self.0)
    }

    pub fn square(&self) -> Self {
        *self * *self
    }

    /// `2 · self`.
    pub fn double(&self) -> Self {
        *self + *self
    }

    /// Multiplicative inverse; fails with `NoInverse` for zero.
    pub fn invert(&self) -> Result<Self> {
        let inv = Modulus::FIELD.inverse(&self.to_u256())?;

        Ok(FieldElement(inv.to_limbs()))
    }
}

/// Subtracts `M` once if `r ≥ M`.
#[inline(always)]
fn normalize(r: Limbs) -> Limbs {
    let (d, borrow) = limbs::sub(&r, &P);

    if borrow == 0 { d } else { r }
}

/// Folds a 512-bit product into `[0, M)`.
fn reduce_wide(t: &WideLimbs) -> Limbs {
    let mut r = [0u64; 4];
    let mut carry = 0u128;

    // lo + 38 · hi
    for i in 0..4 {
        let v = t[i] as u128 + t[i + 4] as u128 * 38 + carry;
        r[i] = v as u64;
        carry = v >> 64;
    }

    // Everything at or above bit 255 folds back with weight 19.
    let top = ((carry as u64) << 1) | (r[3] >> 63);
    r[3] &= 0x7fff_ffff_ffff_ffff;

    let mut c = top as u128 * 19;
    for limb in r.iter_mut() {
        let v = *limb as u128 + c;
        *limb = v as u64;
        c = v >> 64;
    }

    normalize(r)
}

impl Add for FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: FieldElement) -> FieldElement {
        // Both operands are below 2²⁵⁵, so the sum cannot carry out.
        FieldElement(normalize(limbs::add(&self.0, &rhs.0).0))
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: FieldElement) -> FieldElement {
        let (d, borrow) = limbs::sub(&self.0, &rhs.0);

        if borrow == 0 {
            FieldElement(d)
        } else {
            FieldElement(limbs::add(&d, &P).0)
        }
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: FieldElement) -> FieldElement {
        FieldElement(reduce_wide(&limbs::mul_wide(&self.0, &rhs.0)))
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement::ZERO - self
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({:#x})", self.to_u256())
    }
}
