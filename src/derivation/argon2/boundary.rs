//! Initialization and finalization for Argon2.
//!
//! This module handles the boundary operations of the Argon2 algorithm:
//! computing the initial hash H0 from all inputs, seeding the first two
//! blocks of every lane, and deriving the final tag from the filled memory.

use log::debug;
use zeroize::Zeroizing;

use super::block::{BLOCK_BYTES, Block};
use super::memory::Memory;
use super::params::{Argon2Params, Schedule, Variant};
use crate::encoding::LeStream;
use crate::error::Result;
use crate::hash::{Blake2b, blake2b_long, blake2b_long_into};

/// Argon2 version 1.3.
pub const ARGON2_VERSION: u32 = 0x13;

/// Size of H0 in bytes.
pub const SEED_BYTES: usize = 64;

/// Computes the initial hash H0 from all Argon2 inputs.
///
/// The input format is defined in RFC 9106 §3.2:
/// ```text
/// H0 = BLAKE2b(p || T || m || t || v || y || |P| || P || |S| || S || |K| || K || |X| || X)
/// ```
/// `m` is the memory size as requested, before any rounding.
pub(crate) fn init(
    variant: Variant,
    password: &[u8],
    salt: &[u8],
    params: &Argon2Params,
) -> Result<Zeroizing<[u8; SEED_BYTES]>> {
    let mut stream = LeStream::new();
    stream
        .push_u32(params.lanes)
        .push_u32(params.tag_len as u32)
        .push_u32(params.mem_kib)
        .push_u32(params.time)
        .push_u32(ARGON2_VERSION)
        .push_u32(variant.type_id())
        .push_prefixed(Some(password))
        .push_prefixed(Some(salt))
        .push_prefixed(params.secret.as_deref())
        .push_prefixed(params.associated_data.as_deref());

    let mut h0 = Zeroizing::new([0u8; SEED_BYTES]);
    let mut hasher = Blake2b::new(SEED_BYTES)?;
    hasher.update_stream(&stream);
    hasher.finalize_into(&mut h0[..])?;

    Ok(h0)
}

/// Writes `B[i][j] = H′(H0 || j || i)` for `j ∈ {0, 1}` in every lane.
pub(crate) fn seed_lanes(memory: &mut Memory, h0: &[u8; SEED_BYTES], schedule: Schedule) -> Result<()> {
    debug!("argon2 seeding {} lanes", memory.layout().lanes);

    memory.for_each_lane_mut(schedule, |lane, blocks| {
        for (j, block) in blocks.iter_mut().take(2).enumerate() {
            let mut stream = LeStream::new();
            stream.push_bytes(h0).push_u32(j as u32).push_u32(lane);

            let mut bytes = Zeroizing::new([0u8; BLOCK_BYTES]);
            blake2b_long_into(&stream, &mut bytes[..])?;
            *block = Block::from_bytes(&bytes);
        }
        Ok(())
    })
}

/// Finalizes the Argon2 computation to produce the output tag.
///
/// The finalization XORs together the last block of each lane (forming
/// a single 1024-byte block), then applies the variable-length hash
/// function H' to produce the final tag of the requested length. Words are
/// serialized little-endian regardless of the host.
pub(crate) fn finalize(memory: &Memory, tag_len: usize) -> Result<Vec<u8>> {
    let layout = memory.layout();
    let last = layout.lane_len - 1;

    let mut final_block = memory.block(0, last).clone();
    for lane in 1..layout.lanes {
        memory.xor_into(&mut final_block, lane, last);
    }

    debug!("argon2 finalizing {tag_len}-byte tag");

    let mut stream = LeStream::new();
    stream.push_words(&final_block.0);
    blake2b_long(&stream, tag_len)
}
