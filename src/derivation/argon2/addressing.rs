//! Pseudo-random value generation for reference selection.
//!
//! Argon2i, Argon2d and Argon2id differ only in where each step's 64-bit
//! pseudo-random value comes from:
//!
//! - **Data-independent**: values are precomputed for the whole segment
//!   from an address block G(0, G(0, Z)), where Z holds the position
//!   parameters and a counter bumped every 128 values. Memory contents are
//!   never read, so the access pattern leaks nothing about the password.
//! - **Data-dependent**: the value is the first word of the previous block.
//!
//! Argon2id switches from the first to the second after the first half of
//! the first pass.

use super::block::{BLOCK_WORDS, Block};
use super::memory::MemoryLayout;
use super::params::{SYNC_POINTS, Variant};

/// Where a segment takes its pseudo-random values from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    DataIndependent,
    DataDependent,
}

impl AddressingMode {
    /// Addressing policy for `variant` at the given pass and slice.
    pub fn select(variant: Variant, pass: u32, slice: u32) -> Self {
        match variant {
            Variant::Argon2i => AddressingMode::DataIndependent,
            Variant::Argon2d => AddressingMode::DataDependent,
            Variant::Argon2id if pass == 0 && slice < SYNC_POINTS / 2 => {
                AddressingMode::DataIndependent
            }
            Variant::Argon2id => AddressingMode::DataDependent,
        }
    }
}

/// Pseudo-random source for one segment.
pub(crate) enum PseudoRandom {
    Precomputed(Vec<u64>),
    PreviousBlock,
}

impl PseudoRandom {
    pub(crate) fn for_segment(
        variant: Variant,
        pass: u32,
        lane: u32,
        slice: u32,
        layout: &MemoryLayout,
        time: u32,
    ) -> Self {
        match AddressingMode::select(variant, pass, slice) {
            AddressingMode::DataIndependent => PseudoRandom::Precomputed(address_values(
                variant, pass, lane, slice, layout, time,
            )),
            AddressingMode::DataDependent => PseudoRandom::PreviousBlock,
        }
    }

    /// Value for step `index` of the segment.
    #[inline]
    pub(crate) fn value(&self, index: u32, previous: &Block) -> u64 {
        match self {
            PseudoRandom::Precomputed(values) => values[index as usize],
            PseudoRandom::PreviousBlock => previous.0[0],
        }
    }
}

/// Precomputes the data-independent values of a whole segment.
///
/// Z = (pass, lane, slice, total blocks, passes, type, counter, 0, ...).
/// The counter starts at 1 and a fresh address block is generated for
/// every 128 values.
pub fn address_values(
    variant: Variant,
    pass: u32,
    lane: u32,
    slice: u32,
    layout: &MemoryLayout,
    time: u32,
) -> Vec<u64> {
    let mut input = Block::ZERO;
    input.0[0] = pass as u64;
    input.0[1] = lane as u64;
    input.0[2] = slice as u64;
    input.0[3] = layout.total_blocks as u64;
    input.0[4] = time as u64;
    input.0[5] = variant.type_id() as u64;

    let segment_len = layout.segment_len as usize;
    let mut values = Vec::with_capacity(segment_len);
    let mut address = Block::ZERO;

    for i in 0..segment_len {
        let word = i % BLOCK_WORDS;
        if word == 0 {
            input.0[6] += 1;
            address = next_address_block(&input);
        }
        values.push(address.0[word]);
    }

    values
}

fn next_address_block(input: &Block) -> Block {
    let zero = Block::ZERO;
    let mut tmp = Block::ZERO;
    Block::compress(&mut tmp, input, &zero);
    let mut address = Block::ZERO;
    Block::compress(&mut address, &tmp, &zero);
    address
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argon2id_policy_table() {
        for slice in 0..SYNC_POINTS {
            let expected = if slice < 2 {
                AddressingMode::DataIndependent
            } else {
                AddressingMode::DataDependent
            };
            assert_eq!(AddressingMode::select(Variant::Argon2id, 0, slice), expected);
            assert_eq!(
                AddressingMode::select(Variant::Argon2id, 1, slice),
                AddressingMode::DataDependent
            );
        }
    }

    #[test]
    fn pure_variants_ignore_position() {
        for pass in 0..3 {
            for slice in 0..SYNC_POINTS {
                assert_eq!(
                    AddressingMode::select(Variant::Argon2i, pass, slice),
                    AddressingMode::DataIndependent
                );
                assert_eq!(
                    AddressingMode::select(Variant::Argon2d, pass, slice),
                    AddressingMode::DataDependent
                );
            }
        }
    }

    #[test]
    fn address_block_regenerates_every_128_values() {
        let layout = MemoryLayout::new(1, 1024).unwrap();
        let values = address_values(Variant::Argon2i, 0, 0, 0, &layout, 1);
        assert_eq!(values.len(), 256);
        assert_ne!(values[..128], values[128..]);

        let again = address_values(Variant::Argon2i, 0, 0, 0, &layout, 1);
        assert_eq!(values, again);
    }

    #[test]
    fn address_values_depend_on_position() {
        let layout = MemoryLayout::new(2, 64).unwrap();
        let a = address_values(Variant::Argon2id, 0, 0, 0, &layout, 1);
        let b = address_values(Variant::Argon2id, 0, 1, 0, &layout, 1);
        let c = address_values(Variant::Argon2i, 0, 0, 0, &layout, 1);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn previous_block_source_reads_first_word() {
        let mut previous = Block::ZERO;
        previous.0[0] = 0xdead_beef_0000_0001;
        previous.0[1] = 7;
        assert_eq!(
            PseudoRandom::PreviousBlock.value(5, &previous),
            0xdead_beef_0000_0001
        );
    }
}
