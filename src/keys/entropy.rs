//! Sources of secure random bytes for key generation.
//!
//! Key generation never produces randomness itself: it asks an
//! [`EntropySource`] for bytes. [`OsEntropy`] reads from the operating
//! system; tests and embedders may supply their own source.

use crate::error::Result;
use crate::os::sys_random;

/// A supplier of cryptographically secure random bytes.
pub trait EntropySource {
    /// Fills `buf` entirely with random bytes.
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()>;
}

/// Entropy drawn directly from the operating system.
///
/// This may block until the system entropy pool is initialized.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        sys_random(buf)
    }
}
