//! Raw 64-byte point encoding.
//!
//! A point is encoded as its affine coordinates, each written as a 32-byte
//! big-endian integer left-padded with zeros:
//!
//! ```text
//! [ x (32 bytes, BE) | y (32 bytes, BE) ]
//! ```
//!
//! This is not the 32-byte compressed Ed25519 encoding (y with the sign of
//! x); it is not interoperable with RFC 8032 implementations.
//!
//! Decoding only checks the buffer length. Coordinates at or above `M`
//! are reduced, and the curve equation is not verified unless
//! [`Point::from_bytes_validated`] is used.

use tracing::debug;

use crate::curve::Point;
use crate::error::{Error, Result};
use crate::primitives::U256;

/// Length of an encoded point in bytes.
pub const ENCODED_LEN: usize = 64;

impl Point {
    /// Encodes the point as `x ‖ y` in affine form.
    ///
    /// Fails with [`Error::NoInverse`] for a degenerate point with `Z ≡ 0`.
    pub fn to_bytes(&self) -> Result<[u8; ENCODED_LEN]> {
        let (x, y) = self.affine()?;

        let mut out = [0u8; ENCODED_LEN];
        out[..32].copy_from_slice(&x.to_be_bytes());
        out[32..].copy_from_slice(&y.to_be_bytes());

        Ok(out)
    }

    /// Decodes `x ‖ y` into `(x, y, 1, x·y)`.
    ///
    /// Fails with [`Error::InvalidLength`] unless `buf` is exactly
    /// [`ENCODED_LEN`] bytes long.
    pub fn from_bytes(buf: &[u8]) -> Result<Point> {
        if buf.len() != ENCODED_LEN {
            debug!(
                expected = ENCODED_LEN,
                actual = buf.len(),
                "rejected point encoding"
            );

            return Err(Error::InvalidLength {
                expected: ENCODED_LEN,
                actual: buf.len(),
            });
        }

        let (x, y) = buf.split_at(32);

        Ok(Point::from_affine(
            &U256::from_be_slice(x)?,
            &U256::from_be_slice(y)?,
        ))
    }

    /// Decodes like [`Point::from_bytes`], then requires the point to be on
    /// the curve and in the prime-order subgroup.
    pub fn from_bytes_validated(buf: &[u8]) -> Result<Point> {
        let point = Point::from_bytes(buf)?;
        point.validate()?;

        Ok(point)
    }
}

impl TryFrom<&[u8]> for Point {
    type Error = Error;

    fn try_from(buf: &[u8]) -> Result<Self> {
        Point::from_bytes(buf)
    }
}
