//! Operating system abstraction layer
//!
//! Provides a platform-independent interface to operating system entropy,
//! used to draw fresh salts for new password hashes. Platform selection is
//! delegated to the `getrandom` crate, which picks the right system call or
//! API for the target at compile time.

use crate::error::Result;

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// # Errors
/// Returns [`crate::error::Error::Entropy`] if the operating system
/// cannot provide randomness. No partially filled buffer is ever used.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<()> {
    getrandom::fill(buf)?;
    Ok(())
}
