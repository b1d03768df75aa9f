//! BLAKE2b incremental hasher.
//!
//! The hasher keeps the 8-word chaining state, a one-block input buffer and
//! a 128-bit byte counter. Input is buffered and compressed each time a full
//! block is followed by more data, so the last block (full or partial) is
//! always left for [`Blake2b::finalize`] to compress with the final flag.

use core::fmt;

use zeroize::{Zeroize, Zeroizing};

use super::computations::compress;
use super::{BLOCK_BYTES, IV, MAX_OUT_BYTES};
use crate::encoding::LeStream;
use crate::error::{ConfigError, Result};

/// Incremental BLAKE2b state.
pub struct Blake2b {
    state: [u64; 8],
    buffer: [u8; BLOCK_BYTES],
    buffered: usize,
    counter: u128,
    out_len: usize,
}

impl Blake2b {
    /// Creates an unkeyed hasher producing `out_len` bytes.
    ///
    /// # Errors
    /// `out_len` must be in `1..=64`.
    pub fn new(out_len: usize) -> Result<Self> {
        Self::new_keyed(&[], out_len)
    }

    /// Creates a keyed hasher producing `out_len` bytes.
    ///
    /// A non-empty key is zero-padded to a full block and processed before
    /// any caller data.
    ///
    /// # Errors
    /// `out_len` must be in `1..=64` and the key at most 64 bytes long.
    /// Both are checked before any state is built.
    pub fn new_keyed(key: &[u8], out_len: usize) -> Result<Self> {
        if out_len == 0 || out_len > MAX_OUT_BYTES {
            return Err(ConfigError::DigestLength { requested: out_len }.into());
        }
        if key.len() > MAX_OUT_BYTES {
            return Err(ConfigError::KeyLength { length: key.len() }.into());
        }

        // Parameter block word 0: digest length, key length, fanout 1, depth 1.
        let mut state = IV;
        state[0] ^= 0x0101_0000 ^ ((key.len() as u64) << 8) ^ out_len as u64;

        let mut hasher = Self {
            state,
            buffer: [0u8; BLOCK_BYTES],
            buffered: 0,
            counter: 0,
            out_len,
        };

        if !key.is_empty() {
            hasher.buffer[..key.len()].copy_from_slice(key);
            hasher.buffered = BLOCK_BYTES;
        }

        Ok(hasher)
    }

    /// Digest length in bytes.
    pub fn out_len(&self) -> usize {
        self.out_len
    }

    /// Absorbs more input. May be called any number of times.
    pub fn update(&mut self, mut data: &[u8]) -> &mut Self {
        while !data.is_empty() {
            if self.buffered == BLOCK_BYTES {
                self.counter += BLOCK_BYTES as u128;
                compress(&mut self.state, &self.buffer, self.counter, false);
                self.buffered = 0;
            }

            let take = (BLOCK_BYTES - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];
        }
        self
    }

    /// Absorbs an encoded field stream chunk by chunk.
    pub fn update_stream(&mut self, stream: &LeStream<'_>) -> &mut Self {
        stream.for_each_chunk(|chunk| {
            self.update(chunk);
        });
        self
    }

    /// Consumes the hasher and returns the `out_len`-byte digest.
    pub fn finalize(mut self) -> Vec<u8> {
        let full = self.finish();
        full[..self.out_len].to_vec()
    }

    /// Consumes the hasher and writes the digest into `out`.
    ///
    /// # Errors
    /// `out` must be exactly `out_len` bytes long.
    pub fn finalize_into(mut self, out: &mut [u8]) -> Result<()> {
        if out.len() != self.out_len {
            return Err(ConfigError::DigestLength {
                requested: out.len(),
            }
            .into());
        }
        let full = self.finish();
        out.copy_from_slice(&full[..self.out_len]);
        Ok(())
    }

    fn finish(&mut self) -> Zeroizing<[u8; MAX_OUT_BYTES]> {
        self.counter += self.buffered as u128;
        self.buffer[self.buffered..].fill(0);
        compress(&mut self.state, &self.buffer, self.counter, true);

        let mut out = Zeroizing::new([0u8; MAX_OUT_BYTES]);
        for (chunk, word) in out.chunks_exact_mut(8).zip(self.state.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }
}

impl Drop for Blake2b {
    fn drop(&mut self) {
        self.state.zeroize();
        self.buffer.zeroize();
        self.buffered = 0;
        self.counter = 0;
    }
}

impl fmt::Debug for Blake2b {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blake2b")
            .field("out_len", &self.out_len)
            .finish_non_exhaustive()
    }
}

/// Computes the unkeyed BLAKE2b digest of `input`.
///
/// # Errors
/// `out_len` must be in `1..=64`.
pub fn blake2b(out_len: usize, input: &[u8]) -> Result<Vec<u8>> {
    let mut hasher = Blake2b::new(out_len)?;
    hasher.update(input);
    Ok(hasher.finalize())
}

/// Computes the keyed BLAKE2b digest of `input`.
///
/// # Errors
/// `out_len` must be in `1..=64` and `key` at most 64 bytes.
pub fn blake2b_keyed(key: &[u8], out_len: usize, input: &[u8]) -> Result<Vec<u8>> {
    let mut hasher = Blake2b::new_keyed(key, out_len)?;
    hasher.update(input);
    Ok(hasher.finalize())
}
