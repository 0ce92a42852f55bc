//! Arithmetic modulo an arbitrary non-zero 256-bit modulus.
//!
//! [`Modulus`] carries a validated modulus and provides reduction,
//! addition, subtraction, multiplication, exponentiation and inversion.
//! Every result is normalized into `[0, m)`.
//!
//! Reduction is a shift-and-subtract loop over the operand bits. It is
//! adequate for scalars and occasional inversions; the field prime used by
//! point arithmetic has a dedicated fast path in `arith::field`.

use std::cmp::Ordering;

use tracing::debug;

use crate::curve::constants::{FIELD_PRIME, GROUP_ORDER};
use crate::error::{Error, Result};
use crate::primitives::limbs::{self, Limbs};
use crate::primitives::{U256, U512};

/// A non-zero modulus together with its limb decomposition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Modulus {
    value: U256,
    limbs: Limbs,
}

impl Modulus {
    /// The field prime `M = 2²⁵⁵ − 19`.
    pub const FIELD: Modulus = Modulus::from_const(FIELD_PRIME);

    /// The order `N` of the prime-order subgroup.
    pub const ORDER: Modulus = Modulus::from_const(GROUP_ORDER);

    /// Wraps a modulus, rejecting zero.
    pub fn new(value: U256) -> Result<Self> {
        if value.is_zero() {
            return Err(Error::ZeroModulus);
        }

        Ok(Self::from_const(value))
    }

    const fn from_const(value: U256) -> Self {
        Self {
            value,
            limbs: value.to_limbs(),
        }
    }

    /// Returns the modulus as an integer.
    pub fn value(&self) -> U256 {
        self.value
    }

    /// Reduces `a` into `[0, m)`.
    pub fn reduce(&self, a: &U256) -> U256 {
        let a = a.to_limbs();

        if limbs::cmp(&a, &self.limbs) == Ordering::Less {
            return U256::from_limbs(a);
        }

        U256::from_limbs(limbs::rem(&a, &self.limbs))
    }

    /// Reduces a 512-bit value into `[0, m)`.
    pub fn reduce_wide(&self, a: &U512) -> U256 {
        U256::from_limbs(limbs::rem(&a.to_limbs(), &self.limbs))
    }

    /// `(a + b) mod m`.
    pub fn add(&self, a: &U256, b: &U256) -> U256 {
        U256::from_limbs(self.add_limbs(&self.reduce_limbs(a), &self.reduce_limbs(b)))
    }

    /// `(a − b) mod m`.
    pub fn sub(&self, a: &U256, b: &U256) -> U256 {
        U256::from_limbs(self.sub_limbs(&self.reduce_limbs(a), &self.reduce_limbs(b)))
    }

    /// `(−a) mod m`.
    pub fn neg(&self, a: &U256) -> U256 {
        self.sub(&U256::ZERO, a)
    }

    /// `(a · b) mod m`.
    pub fn mul(&self, a: &U256, b: &U256) -> U256 {
        U256::from_limbs(self.mul_limbs(&a.to_limbs(), &b.to_limbs()))
    }

    /// `base^exp mod m` by left-to-right square-and-multiply.
    pub fn pow(&self, base: &U256, exp: &U256) -> U256 {
        let base = self.reduce_limbs(base);
        let one = limbs::rem(&[1u64, 0, 0, 0], &self.limbs);
        let mut acc = one;

        for i in (0..exp.bits()).rev() {
            acc = self.mul_limbs(&acc, &acc);

            if exp.bit(i) {
                acc = self.mul_limbs(&acc, &base);
            }
        }

        U256::from_limbs(acc)
    }

    /// Multiplicative inverse of `a` by the extended Euclidean algorithm.
    ///
    /// Fails with [`Error::NoInverse`] when `a ≡ 0 (mod m)` or when `a`
    /// shares a factor with the modulus.
    pub fn inverse(&self, a: &U256) -> Result<U256> {
        let a = self.reduce_limbs(a);

        if limbs::is_zero(&a) {
            debug!(modulus = %self.value, "inverse requested for zero");
            return Err(Error::NoInverse);
        }

        // Invariant: r ≡ a · s (mod m) for both (r0, s0) and (r1, s1).
        let (mut r0, mut r1) = (self.limbs, a);
        let (mut s0, mut s1) = ([0u64; 4], [1u64, 0, 0, 0]);

        while !limbs::is_zero(&r1) {
            let (q, r) = limbs::div_rem(&r0, &r1);
            let q = self.reduce_limbs(&U256::from_limbs(q));
            let s = self.sub_limbs(&s0, &self.mul_limbs(&q, &s1));

            (r0, r1) = (r1, r);
            (s0, s1) = (s1, s);
        }

        if r0 != [1, 0, 0, 0] {
            debug!(modulus = %self.value, "value shares a factor with the modulus");
            return Err(Error::NoInverse);
        }

        Ok(U256::from_limbs(s0))
    }

    fn reduce_limbs(&self, a: &U256) -> Limbs {
        self.reduce(a).to_limbs()
    }

    /// Addition of reduced operands.
    fn add_limbs(&self, a: &Limbs, b: &Limbs) -> Limbs {
        let (sum, carry) = limbs::add(a, b);

        if carry != 0 || limbs::cmp(&sum, &self.limbs) != Ordering::Less {
            limbs::sub(&sum, &self.limbs).0
        } else {
            sum
        }
    }

    /// Subtraction of reduced operands.
    fn sub_limbs(&self, a: &Limbs, b: &Limbs) -> Limbs {
        let (diff, borrow) = limbs::sub(a, b);

        if borrow != 0 {
            limbs::add(&diff, &self.limbs).0
        } else {
            diff
        }
    }

    fn mul_limbs(&self, a: &Limbs, b: &Limbs) -> Limbs {
        limbs::rem(&limbs::mul_wide(a, b), &self.limbs)
    }
}
