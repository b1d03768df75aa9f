//! Variable-length hash H′ (RFC 9106 §3.3).
//!
//! H′ stretches BLAKE2b to outputs longer than 64 bytes. The input is
//! prefixed with the requested length as a 32-bit little-endian integer.
//! Up to 64 bytes, H′ is a single BLAKE2b call of that size. Beyond that,
//! a chain of 64-byte digests is built where each link hashes the
//! *previous digest*, and only the first 32 bytes of every link are
//! emitted. The final link is sized to whatever remains (33..=64 bytes).

use zeroize::Zeroizing;

use super::blake2b::{Blake2b, MAX_OUT_BYTES};
use crate::encoding::LeStream;
use crate::error::{ConfigError, Result};

/// Largest output H′ will produce.
pub const MAX_OUTPUT_BYTES: usize = 1024;

const HALF: usize = MAX_OUT_BYTES / 2;

/// Computes H′ of `input` into a new `out_len`-byte vector.
///
/// # Errors
/// `out_len` must be in `1..=1024`.
pub fn blake2b_long(input: &LeStream<'_>, out_len: usize) -> Result<Vec<u8>> {
    let mut out = vec![0u8; out_len];
    blake2b_long_into(input, &mut out)?;
    Ok(out)
}

/// Computes H′ of `input`, filling all of `out`.
///
/// # Errors
/// `out.len()` must be in `1..=1024`.
pub fn blake2b_long_into(input: &LeStream<'_>, out: &mut [u8]) -> Result<()> {
    let out_len = out.len();
    if out_len == 0 || out_len > MAX_OUTPUT_BYTES {
        return Err(ConfigError::OutputLength {
            requested: out_len,
        }
        .into());
    }

    let mut prefixed = LeStream::new();
    prefixed.push_u32(out_len as u32);

    if out_len <= MAX_OUT_BYTES {
        let mut hasher = Blake2b::new(out_len)?;
        hasher.update_stream(&prefixed).update_stream(input);
        return hasher.finalize_into(out);
    }

    let mut digest = Zeroizing::new([0u8; MAX_OUT_BYTES]);
    let mut hasher = Blake2b::new(MAX_OUT_BYTES)?;
    hasher.update_stream(&prefixed).update_stream(input);
    hasher.finalize_into(&mut digest[..])?;

    out[..HALF].copy_from_slice(&digest[..HALF]);
    let mut offset = HALF;

    while out_len - offset > MAX_OUT_BYTES {
        let mut hasher = Blake2b::new(MAX_OUT_BYTES)?;
        hasher.update(&digest[..]);
        hasher.finalize_into(&mut digest[..])?;

        out[offset..offset + HALF].copy_from_slice(&digest[..HALF]);
        offset += HALF;
    }

    let mut hasher = Blake2b::new(out_len - offset)?;
    hasher.update(&digest[..]);
    hasher.finalize_into(&mut out[offset..])
}
