//! Scalars modulo the group order `N`.
//!
//! A [`Scalar`] is an integer in `[0, N)`. Private keys are scalars, and
//! scalar arithmetic lets callers express relations such as
//! `s = r + h·a (mod N)` whose point images can then be compared.
//!
//! Point multiplication itself accepts any non-negative `U256`; reduction
//! modulo `N` only happens when a `Scalar` is built.

use std::fmt;
use std::ops::{Add, Mul, Neg};

use crate::arith::Modulus;
use crate::error::Result;
use crate::primitives::{U256, U512};

/// An integer modulo the group order `N`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scalar(U256);

impl Scalar {
    pub const ZERO: Scalar = Scalar(U256::ZERO);

    pub const ONE: Scalar = Scalar(U256::ONE);

    /// Reduces an integer modulo `N`.
    pub fn from_u256(value: &U256) -> Self {
        Scalar(Modulus::ORDER.reduce(value))
    }

    /// Interprets 32 bytes as a big-endian integer and reduces it modulo `N`.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Self {
        Self::from_u256(&U256::from_be_bytes(*bytes))
    }

    /// Interprets 64 bytes as a big-endian integer and reduces it modulo `N`.
    ///
    /// Reducing a 512-bit draw leaves a negligible bias compared to the
    /// 256-bit form.
    pub fn from_bytes_wide(bytes: &[u8; 64]) -> Self {
        Scalar(Modulus::ORDER.reduce_wide(&U512::from_be_bytes(*bytes)))
    }

    pub fn to_u256(&self) -> U256 {
        self.0
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.0.to_be_bytes()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiplicative inverse modulo `N`.
    pub fn invert(&self) -> Result<Scalar> {
        Modulus::ORDER.inverse(&self.0).map(Scalar)
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        Scalar(Modulus::ORDER.add(&self.0, &rhs.0))
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        Scalar(Modulus::ORDER.mul(&self.0, &rhs.0))
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        Scalar(Modulus::ORDER.neg(&self.0))
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Scalar::from_u256(&U256::from(value))
    }
}

/// Scalars are usually secret; the value is never printed.
impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Scalar(..)")
    }
}
