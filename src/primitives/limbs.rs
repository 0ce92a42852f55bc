//! Little-endian `u64` limb arithmetic.
//!
//! `U256` and `U512` store their value as big-endian bytes. Arithmetic is
//! carried out on little-endian `u64` limbs (least significant first) with
//! `u128` intermediates, then converted back at the boundary.
//!
//! All helpers are generic over the limb count so the same code serves
//! 256-bit operands, 320-bit remainders and 512-bit products.

use std::cmp::Ordering;

/// Four 64-bit limbs, least significant first.
pub(crate) type Limbs = [u64; 4];

/// Eight 64-bit limbs, least significant first.
pub(crate) type WideLimbs = [u64; 8];

/// Adds with carry, returning `(sum, carry)`.
#[inline(always)]
pub(crate) const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = a as u128 + b as u128 + carry as u128;
    (t as u64, (t >> 64) as u64)
}

/// Subtracts with borrow, returning `(difference, borrow)` with borrow in `{0, 1}`.
#[inline(always)]
pub(crate) const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t = (a as u128).wrapping_sub(b as u128 + borrow as u128);
    (t as u64, (t >> 127) as u64)
}

/// Wrapping addition, returning the final carry.
pub(crate) fn add<const L: usize>(a: &[u64; L], b: &[u64; L]) -> ([u64; L], u64) {
    let mut out = [0u64; L];
    let mut carry = 0;

    for i in 0..L {
        (out[i], carry) = adc(a[i], b[i], carry);
    }

    (out, carry)
}

/// Wrapping subtraction, returning the final borrow.
pub(crate) fn sub<const L: usize>(a: &[u64; L], b: &[u64; L]) -> ([u64; L], u64) {
    let mut out = [0u64; L];
    let mut borrow = 0;

    for i in 0..L {
        (out[i], borrow) = sbb(a[i], b[i], borrow);
    }

    (out, borrow)
}

/// Full 256 × 256 → 512-bit schoolbook product.
pub(crate) fn mul_wide(a: &Limbs, b: &Limbs) -> WideLimbs {
    let mut out = [0u64; 8];

    for i in 0..4 {
        let mut carry = 0u128;

        for j in 0..4 {
            let t = out[i + j] as u128 + a[i] as u128 * b[j] as u128 + carry;
            out[i + j] = t as u64;
            carry = t >> 64;
        }

        out[i + 4] = carry as u64;
    }

    out
}

/// Multiplies by a single limb and adds a single limb, returning the overflow limb.
pub(crate) fn mul_small_add<const L: usize>(a: &mut [u64; L], m: u64, addend: u64) -> u64 {
    let mut carry = addend as u128;

    for limb in a.iter_mut() {
        let t = *limb as u128 * m as u128 + carry;
        *limb = t as u64;
        carry = t >> 64;
    }

    carry as u64
}

/// Compares two limb arrays as unsigned integers.
pub(crate) fn cmp<const L: usize>(a: &[u64; L], b: &[u64; L]) -> Ordering {
    for i in (0..L).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => continue,
            other => return other,
        }
    }

    Ordering::Equal
}

pub(crate) fn is_zero<const L: usize>(a: &[u64; L]) -> bool {
    a.iter().all(|&limb| limb == 0)
}

/// Number of significant bits.
pub(crate) fn bit_len<const L: usize>(a: &[u64; L]) -> usize {
    for i in (0..L).rev() {
        if a[i] != 0 {
            return 64 * i + (64 - a[i].leading_zeros() as usize);
        }
    }

    0
}

#[inline(always)]
pub(crate) fn bit<const L: usize>(a: &[u64; L], i: usize) -> bool {
    (a[i / 64] >> (i % 64)) & 1 == 1
}

/// Shifts left by one bit in place, discarding the top bit.
#[inline(always)]
pub(crate) fn shl1<const L: usize>(a: &mut [u64; L]) {
    for i in (1..L).rev() {
        a[i] = (a[i] << 1) | (a[i - 1] >> 63);
    }

    a[0] <<= 1;
}

/// Widens a 256-bit operand to five limbs.
#[inline(always)]
fn widen(a: &Limbs) -> [u64; 5] {
    [a[0], a[1], a[2], a[3], 0]
}

/// Remainder of an `L`-limb dividend by a non-zero 256-bit divisor.
///
/// Classic shift-and-subtract: the running remainder stays below the
/// divisor, so five limbs hold the intermediate `2r + 1`.
pub(crate) fn rem<const L: usize>(a: &[u64; L], m: &Limbs) -> Limbs {
    debug_assert!(!is_zero(m), "division by zero");

    let m = widen(m);
    let mut r = [0u64; 5];

    for i in (0..bit_len(a)).rev() {
        shl1(&mut r);
        r[0] |= bit(a, i) as u64;

        if cmp(&r, &m) != Ordering::Less {
            r = sub(&r, &m).0;
        }
    }

    [r[0], r[1], r[2], r[3]]
}

/// Quotient and remainder of 256-bit operands. The divisor must be non-zero.
pub(crate) fn div_rem(a: &Limbs, b: &Limbs) -> (Limbs, Limbs) {
    debug_assert!(!is_zero(b), "division by zero");

    let b = widen(b);
    let mut q = [0u64; 4];
    let mut r = [0u64; 5];

    for i in (0..bit_len(a)).rev() {
        shl1(&mut r);
        r[0] |= bit(a, i) as u64;

        if cmp(&r, &b) != Ordering::Less {
            r = sub(&r, &b).0;
            q[i / 64] |= 1 << (i % 64);
        }
    }

    (q, [r[0], r[1], r[2], r[3]])
}
