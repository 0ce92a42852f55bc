//! Operating system entropy (Linux).
//!
//! Random bytes come from the kernel through the `getrandom` system call,
//! which blocks until the entropy pool is initialized.

use std::io;

use libc::{c_void, getrandom};

use crate::error::{Error, Result};

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// Partial reads and `EINTR` are retried until the buffer is full; any
/// other failure is returned as [`Error::Entropy`].
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            let err = io::Error::last_os_error();

            if err.kind() == io::ErrorKind::Interrupted {
                continue;
            }

            return Err(Error::Entropy(err.to_string()));
        }

        filled += ret as usize;
    }

    Ok(())
}
