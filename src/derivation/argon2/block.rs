//! Block operations for Argon2.
//!
//! This module defines the fundamental 1024-byte block structure and the
//! compression function G that forms the core of the Argon2 algorithm.
//! The compression function is based on the BLAKE2b round function but
//! uses additional multiplication operations for enhanced diffusion.

use zeroize::Zeroize;

/// Number of 64-bit words in a block.
pub const BLOCK_WORDS: usize = 128;

/// Size of a block in bytes.
pub const BLOCK_BYTES: usize = BLOCK_WORDS * 8;

/// A 1024-byte memory block (128 × 64-bit words).
///
/// Blocks are the fundamental unit of memory in Argon2. The algorithm
/// operates by filling and mixing these blocks using the compression
/// function G. Each block is zeroed on drop for security.
#[derive(Debug, Clone)]
pub struct Block(pub [u64; BLOCK_WORDS]);

impl Block {
    pub const ZERO: Self = Self([0u64; BLOCK_WORDS]);

    /// XORs `other` into `self`.
    pub fn in_place_xor(&mut self, other: &Block) {
        self.0
            .iter_mut()
            .zip(other.0.iter())
            .for_each(|(a, b)| *a ^= b);
    }

    /// Reads a block from its little-endian byte form.
    pub fn from_bytes(bytes: &[u8; BLOCK_BYTES]) -> Self {
        let mut block = Block::ZERO;
        for (word, chunk) in block.0.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut le = [0u8; 8];
            le.copy_from_slice(chunk);
            *word = u64::from_le_bytes(le);
        }
        block
    }

    /// Little-endian byte form of the block.
    pub fn to_bytes(&self) -> [u8; BLOCK_BYTES] {
        let mut out = [0u8; BLOCK_BYTES];
        for (chunk, word) in out.chunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }

    /// Compression function G, accumulated into `dest`.
    ///
    /// With `R = reference ⊕ previous`, computes
    /// `dest ← dest ⊕ R ⊕ P(R)`, where P applies the modified BLAKE2b
    /// round to the 8 column groups and then to the 8 row groups. For a
    /// freshly zeroed `dest` this is plain `G(reference, previous)`; on
    /// later passes it is the version 1.3 XOR-overwrite.
    pub fn compress(dest: &mut Block, reference: &Block, previous: &Block) {
        let mut tmp = Block::ZERO;
        for ((t, r), p) in tmp.0.iter_mut().zip(reference.0.iter()).zip(previous.0.iter()) {
            *t = r ^ p;
        }

        dest.in_place_xor(&tmp);
        tmp.permute();
        dest.in_place_xor(&tmp);
    }

    fn permute(&mut self) {
        // Columns: P on 8 groups of 16 consecutive words
        for i in 0..8 {
            let base = 16 * i;
            let mut v = [0u64; 16];
            v.copy_from_slice(&self.0[base..base + 16]);
            permute_p(&mut v);
            self.0[base..base + 16].copy_from_slice(&v);
        }

        // Rows: P on 8 groups of 8 interleaved word pairs
        for i in 0..8 {
            let mut v = [0u64; 16];
            for j in 0..8 {
                v[2 * j] = self.0[2 * i + 16 * j];
                v[2 * j + 1] = self.0[2 * i + 16 * j + 1];
            }

            permute_p(&mut v);

            for j in 0..8 {
                self.0[2 * i + 16 * j] = v[2 * j];
                self.0[2 * i + 16 * j + 1] = v[2 * j + 1];
            }
        }
    }
}

impl Drop for Block {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// GB mixing function (Argon2 variant of BLAKE2b's G).
///
/// Unlike the plain BLAKE2b G function which adds message words,
/// Argon2's GB function uses multiplication of the lower 32 bits to
/// achieve better diffusion. The formula for each step is:
///
/// ```text
/// a = a + b + 2 × trunc(a) × trunc(b)
/// d = (d ⊕ a) >>> rotation
/// ```
///
/// where trunc() extracts the lower 32 bits. The rotation amounts are
/// 32, 24, 16, and 63 bits respectively.
#[inline(always)]
fn gb(a: u64, b: u64, c: u64, d: u64) -> (u64, u64, u64, u64) {
    let a = a.wrapping_add(b).wrapping_add(fma_low(a, b));
    let d = (d ^ a).rotate_right(32);

    let c = c.wrapping_add(d).wrapping_add(fma_low(c, d));
    let b = (b ^ c).rotate_right(24);

    let a = a.wrapping_add(b).wrapping_add(fma_low(a, b));
    let d = (d ^ a).rotate_right(16);

    let c = c.wrapping_add(d).wrapping_add(fma_low(c, d));
    let b = (b ^ c).rotate_right(63);

    (a, b, c, d)
}

/// `2 × trunc(x) × trunc(y)` modulo 2^64.
#[inline(always)]
fn fma_low(x: u64, y: u64) -> u64 {
    2u64.wrapping_mul(x as u32 as u64).wrapping_mul(y as u32 as u64)
}

/// P permutation: one round of the BLAKE2-like mixing.
///
/// Applies GB to a 4×4 matrix of 64-bit words, first along columns,
/// then along diagonals.
#[inline(always)]
fn permute_p(v: &mut [u64; 16]) {
    (v[0], v[4], v[8], v[12]) = gb(v[0], v[4], v[8], v[12]);
    (v[1], v[5], v[9], v[13]) = gb(v[1], v[5], v[9], v[13]);
    (v[2], v[6], v[10], v[14]) = gb(v[2], v[6], v[10], v[14]);
    (v[3], v[7], v[11], v[15]) = gb(v[3], v[7], v[11], v[15]);

    (v[0], v[5], v[10], v[15]) = gb(v[0], v[5], v[10], v[15]);
    (v[1], v[6], v[11], v[12]) = gb(v[1], v[6], v[11], v[12]);
    (v[2], v[7], v[8], v[13]) = gb(v[2], v[7], v[8], v[13]);
    (v[3], v[4], v[9], v[14]) = gb(v[3], v[4], v[9], v[14]);
}
