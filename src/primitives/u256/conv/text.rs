//! Parsing `U256` values from textual literals.
//!
//! Curve parameters are usually published as decimal numbers, while test
//! vectors tend to be hexadecimal. Both forms are accepted; `FromStr`
//! treats a `0x` prefix as hexadecimal and anything else as decimal.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::primitives::U256;
use crate::primitives::limbs;

impl U256 {
    /// Parses a decimal literal.
    ///
    /// Underscores are accepted as digit separators.
    pub fn from_dec_str(s: &str) -> Result<Self> {
        Self::parse_radix(s, 10)
    }

    /// Parses a hexadecimal literal, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        Self::parse_radix(digits, 16)
    }

    fn parse_radix(s: &str, radix: u32) -> Result<Self> {
        let mut acc = [0u64; 4];
        let mut seen_digit = false;

        for c in s.chars() {
            if c == '_' {
                continue;
            }

            let digit = c.to_digit(radix).ok_or(Error::InvalidDigit(c))?;
            seen_digit = true;

            if limbs::mul_small_add(&mut acc, radix as u64, digit as u64) != 0 {
                return Err(Error::Overflow);
            }
        }

        if !seen_digit {
            return Err(Error::InvalidLength {
                expected: 1,
                actual: 0,
            });
        }

        Ok(U256::from_limbs(acc))
    }
}

impl FromStr for U256 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.starts_with("0x") || s.starts_with("0X") {
            U256::from_hex(s)
        } else {
            U256::from_dec_str(s)
        }
    }
}
