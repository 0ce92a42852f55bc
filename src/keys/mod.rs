//! Key material and key agreement.
//!
//! This module defines [`Key`], a private scalar (or an explicit
//! public-only marker) together with its public point, and the
//! [`EntropySource`] abstraction used to draw fresh private scalars.
//!
//! It provides a clear separation between **key material** and the curve
//! arithmetic in `crate::curve`. Diffie–Hellman agreement is the only
//! protocol operation offered; signatures, key persistence and any
//! transport concerns are left to higher layers.

mod core;
mod entropy;

pub use self::core::{Key, PrivatePart};
pub use entropy::{EntropySource, OsEntropy};
