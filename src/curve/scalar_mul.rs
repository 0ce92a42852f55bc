//! Scalar multiplication by double-and-add.
//!
//! The scalar is scanned from its least significant bit: the running
//! multiple of the input is added into the accumulator whenever the
//! current bit is set, then doubled. The loop stops once the remaining
//! scalar is zero, so the cost is bounded by the bit length of `k`.
//!
//! This is **not** constant-time: the number of additions and the loop
//! length both depend on the scalar. Any threat model with local timing
//! or trace observers needs a fixed-schedule ladder instead.

use std::ops::Mul;

use crate::curve::{Point, Scalar};
use crate::primitives::U256;

impl Point {
    /// Computes `k · self`.
    ///
    /// `k` is not reduced modulo the group order; any 256-bit value is
    /// accepted and `0 · P` is the identity.
    pub fn multiply(&self, k: &U256) -> Point {
        let mut acc = Point::IDENTITY;
        let mut addend = *self;
        let mut k = *k;

        while !k.is_zero() {
            if k.is_odd() {
                acc = acc.add(&addend);
            }

            addend = addend.double();
            k = k >> 1;
        }

        acc
    }
}

impl Mul<&U256> for &Point {
    type Output = Point;

    fn mul(self, k: &U256) -> Point {
        self.multiply(k)
    }
}

impl Mul<&U256> for Point {
    type Output = Point;

    fn mul(self, k: &U256) -> Point {
        self.multiply(k)
    }
}

impl Mul<&Scalar> for &Point {
    type Output = Point;

    fn mul(self, k: &Scalar) -> Point {
        self.multiply(&k.to_u256())
    }
}

impl Mul<Scalar> for Point {
    type Output = Point;

    fn mul(self, k: Scalar) -> Point {
        self.multiply(&k.to_u256())
    }
}
