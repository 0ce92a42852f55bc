//! Points on Edwards25519 in extended coordinates.
//!
//! A point is stored as `(X : Y : Z : T)` with affine coordinates
//! `x = X/Z`, `y = Y/Z` and the invariant `T = X·Y/Z`. Any common non-zero
//! multiple of the four coordinates represents the same point, so equality
//! compares cross-products instead of raw coordinates.
//!
//! Addition and doubling follow the `add-2008-hwcd-2` and `dbl-2008-hwcd`
//! formulas for `a = −1` from the Explicit-Formulas Database. The addition
//! formula does not depend on `d` and is undefined when both inputs have
//! the same `x/y` ratio; that case falls back to doubling.
//!
//! No operation here checks that its inputs lie on the curve or in the
//! prime-order subgroup. Callers handling untrusted points use
//! [`Point::validate`].

use std::ops::{Add, Neg};

use crate::arith::FieldElement;
use crate::curve::constants::{A, BASE_POINT, D, GROUP_ORDER};
use crate::error::{Error, Result};
use crate::primitives::U256;

/// A point on Edwards25519 in extended projective coordinates.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

impl Point {
    /// The neutral element `(0, 1, 1, 0)`.
    pub const IDENTITY: Point = Point::from_field_elements(
        FieldElement::ZERO,
        FieldElement::ONE,
        FieldElement::ONE,
        FieldElement::ZERO,
    );

    /// The base point `G`.
    pub const BASE: Point = BASE_POINT;

    pub(crate) const fn from_field_elements(
        x: FieldElement,
        y: FieldElement,
        z: FieldElement,
        t: FieldElement,
    ) -> Self {
        Self { x, y, z, t }
    }

    /// Builds a point from extended coordinates, reducing each modulo `M`.
    ///
    /// The coordinates are trusted: neither the curve equation nor the
    /// `T = X·Y/Z` relation is checked.
    pub fn from_extended(x: &U256, y: &U256, z: &U256, t: &U256) -> Self {
        Self {
            x: FieldElement::from_u256(x),
            y: FieldElement::from_u256(y),
            z: FieldElement::from_u256(z),
            t: FieldElement::from_u256(t),
        }
    }

    /// Builds `(x, y, 1, x·y)` from affine coordinates.
    pub fn from_affine(x: &U256, y: &U256) -> Self {
        let x = FieldElement::from_u256(x);
        let y = FieldElement::from_u256(y);

        Self {
            x,
            y,
            z: FieldElement::ONE,
            t: x * y,
        }
    }

    /// Returns `[X, Y, Z, T]` as canonical integers.
    pub fn to_extended(&self) -> [U256; 4] {
        [
            self.x.to_u256(),
            self.y.to_u256(),
            self.z.to_u256(),
            self.t.to_u256(),
        ]
    }

    /// Affine coordinates `(X·Z⁻¹, Y·Z⁻¹)`.
    ///
    /// Fails with [`Error::NoInverse`] when `Z ≡ 0`.
    pub fn affine(&self) -> Result<(U256, U256)> {
        let z_inv = self.z.invert()?;

        Ok(((self.x * z_inv).to_u256(), (self.y * z_inv).to_u256()))
    }

    pub fn affine_x(&self) -> Result<U256> {
        Ok(self.affine()?.0)
    }

    pub fn affine_y(&self) -> Result<U256> {
        Ok(self.affine()?.1)
    }

    /// Dedicated doubling (`dbl-2008-hwcd`).
    pub fn double(&self) -> Point {
        let a = self.x.square();
        let b = self.y.square();
        let c = self.z.square().double();
        let d = A * a;
        let e = (self.x + self.y).square() - a - b;
        let g = d + b;
        let f = g - c;
        let h = d - b;

        Point {
            x: e * f,
            y: g * h,
            z: f * g,
            t: e * h,
        }
    }

    /// Point addition (`add-2008-hwcd-2`), doubling when `F = 0`.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, other: &Point) -> Point {
        let a = (self.y - self.x) * (other.y + other.x);
        let b = (self.y + self.x) * (other.y - other.x);
        let f = b - a;

        if f.is_zero() {
            return self.double();
        }

        let c = (self.z * other.t).double();
        let d = (self.t * other.z).double();
        let e = d + c;
        let g = b + a;
        let h = d - c;

        Point {
            x: e * f,
            y: g * h,
            z: f * g,
            t: e * h,
        }
    }

    /// `(−X, Y, Z, −T)`.
    pub fn negate(&self) -> Point {
        Point {
            x: -self.x,
            y: self.y,
            z: self.z,
            t: -self.t,
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Point::IDENTITY
    }

    /// Checks `a·X²·Z² + Y²·Z² = Z⁴ + d·X²·Y²` and `X·Y = T·Z` with `Z ≠ 0`.
    pub fn is_on_curve(&self) -> bool {
        if self.z.is_zero() {
            return false;
        }

        let xx = self.x.square();
        let yy = self.y.square();
        let zz = self.z.square();

        let lhs = (A * xx + yy) * zz;
        let rhs = zz.square() + D * xx * yy;

        lhs == rhs && self.x * self.y == self.t * self.z
    }

    /// Checks that `N · P` is the identity.
    pub fn is_torsion_free(&self) -> bool {
        self.multiply(&GROUP_ORDER).is_identity()
    }

    /// Rejects points off the curve or outside the prime-order subgroup.
    pub fn validate(&self) -> Result<()> {
        if !self.is_on_curve() {
            return Err(Error::NotOnCurve);
        }

        if !self.is_torsion_free() {
            return Err(Error::NotInSubgroup);
        }

        Ok(())
    }
}

/// Projective equality: `X₁·Z₂ = X₂·Z₁` and `Y₁·Z₂ = Y₂·Z₁`. `T` is ignored.
impl PartialEq for Point {
    fn eq(&self, other: &Point) -> bool {
        self.x * other.z == other.x * self.z && self.y * other.z == other.y * self.z
    }
}

impl Eq for Point {}

impl Default for Point {
    fn default() -> Self {
        Point::IDENTITY
    }
}

impl Add<&Point> for &Point {
    type Output = Point;

    fn add(self, rhs: &Point) -> Point {
        Point::add(self, rhs)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::add(&self, &rhs)
    }
}

impl Neg for &Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.negate()
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.negate()
    }
}
