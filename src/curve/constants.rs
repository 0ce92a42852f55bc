//! Edwards25519 curve parameters.
//!
//! The curve is the twisted Edwards curve
//!
//! ```text
//! a·x² + y² = 1 + d·x²·y²    with a = −1
//! ```
//!
//! over 𝔽ₘ, `M = 2²⁵⁵ − 19`. The base point `G` generates a subgroup of
//! prime order `N`.
//!
//! All values are compile-time constants stored as little-endian limbs;
//! their decimal forms are checked against the published parameters in
//! the integration tests.

use crate::arith::FieldElement;
use crate::curve::Point;
use crate::primitives::U256;

/// Field prime `M = 2²⁵⁵ − 19`.
pub const FIELD_PRIME: U256 = U256::from_limbs([
    0xffff_ffff_ffff_ffed,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x7fff_ffff_ffff_ffff,
]);

/// Order `N = 2²⁵² + 27742317777372353535851937790883648493` of the
/// prime-order subgroup.
pub const GROUP_ORDER: U256 = U256::from_limbs([
    0x5812_631a_5cf5_d3ed,
    0x14de_f9de_a2f7_9cd6,
    0x0000_0000_0000_0000,
    0x1000_0000_0000_0000,
]);

/// Curve coefficient `a`.
pub const EDWARDS_A: i64 = -1;

/// Curve coefficient `d = −121665 / 121666 (mod M)`.
pub const EDWARDS_D: U256 = U256::from_limbs(D_LIMBS);

/// Affine x-coordinate of the base point.
pub const BASE_X: U256 = U256::from_limbs(GX_LIMBS);

/// Affine y-coordinate of the base point (`4/5 mod M`).
pub const BASE_Y: U256 = U256::from_limbs(GY_LIMBS);

/// Extended `T` coordinate of the base point (`x·y mod M`).
pub const BASE_T: U256 = U256::from_limbs(GT_LIMBS);

const D_LIMBS: [u64; 4] = [
    0x75eb_4dca_1359_78a3,
    0x0070_0a4d_4141_d8ab,
    0x8cc7_4079_7779_e898,
    0x5203_6cee_2b6f_fe73,
];

const GX_LIMBS: [u64; 4] = [
    0xc956_2d60_8f25_d51a,
    0x692c_c760_9525_a7b2,
    0xc0a4_e231_fdd6_dc5c,
    0x2169_36d3_cd6e_53fe,
];

const GY_LIMBS: [u64; 4] = [
    0x6666_6666_6666_6658,
    0x6666_6666_6666_6666,
    0x6666_6666_6666_6666,
    0x6666_6666_6666_6666,
];

const GT_LIMBS: [u64; 4] = [
    0x6dde_8ab3_a5b7_dda3,
    0x20f0_9f80_7751_52f5,
    0x66ea_4e8e_64ab_e37d,
    0x6787_5f0f_d78b_7665,
];

/// `a = −1` as a field element (`M − 1`).
pub(crate) const A: FieldElement = FieldElement::from_limbs_unchecked([
    0xffff_ffff_ffff_ffec,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_ffff_ffff,
    0x7fff_ffff_ffff_ffff,
]);

pub(crate) const D: FieldElement = FieldElement::from_limbs_unchecked(D_LIMBS);

/// The base point `G` in extended coordinates `(gx, gy, 1, gt)`.
pub const BASE_POINT: Point = Point::from_field_elements(
    FieldElement::from_limbs_unchecked(GX_LIMBS),
    FieldElement::from_limbs_unchecked(GY_LIMBS),
    FieldElement::ONE,
    FieldElement::from_limbs_unchecked(GT_LIMBS),
);
