//! Memory organization and filling algorithm for Argon2.
//!
//! This module implements the core memory-filling loop of Argon2. Memory
//! is organized as a matrix of lanes (rows) and columns, with each cell
//! containing a 1024-byte block. Lanes can be processed independently
//! within each slice, enabling parallelism.
//!
//! The arena is one contiguous `Vec<Block>` addressed by `(lane, index)`.
//! During a slice every lane reads the arena through a shared reference
//! and writes into a private copy of its own segment. The copies are
//! swapped back only once all lanes are done, which is the slice barrier.

use log::trace;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::addressing::PseudoRandom;
use super::block::Block;
use super::params::{SYNC_POINTS, Schedule, Variant};
use super::reference::{Position, reference_position};
use crate::error::{ConfigError, Result};

/// Memory layout parameters for Argon2.
///
/// The memory is organized as follows:
/// - Total memory is divided into `lanes` independent rows.
/// - Each lane contains `lane_len` blocks.
/// - Each lane is divided into 4 slices (sync points).
/// - Each slice contains `segment_len` blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryLayout {
    pub lanes: u32,
    pub lane_len: u32,
    pub segment_len: u32,
    pub total_blocks: u32,
}

impl MemoryLayout {
    /// Splits `blocks` blocks over `lanes` lanes, rounding each lane down
    /// to a multiple of 4.
    ///
    /// # Errors
    /// Fails with [`ConfigError::LaneTooShort`] if a lane would hold fewer
    /// than 4 blocks, and [`ConfigError::TooFewLanes`] for zero lanes.
    pub fn new(lanes: u32, blocks: u32) -> Result<Self> {
        if lanes == 0 {
            return Err(ConfigError::TooFewLanes.into());
        }

        let segment_len = blocks / (SYNC_POINTS * lanes);
        let lane_len = segment_len * SYNC_POINTS;

        if lane_len < SYNC_POINTS {
            return Err(ConfigError::LaneTooShort {
                blocks: blocks / lanes,
            }
            .into());
        }

        Ok(Self {
            lanes,
            lane_len,
            segment_len,
            total_blocks: lane_len * lanes,
        })
    }
}

/// The block arena of one hash invocation.
///
/// Every block is wiped when the arena is dropped.
pub struct Memory {
    blocks: Vec<Block>,
    layout: MemoryLayout,
}

impl Memory {
    /// Allocates a zeroed arena.
    pub fn new(layout: MemoryLayout) -> Self {
        Self {
            blocks: vec![Block::ZERO; layout.total_blocks as usize],
            layout,
        }
    }

    pub fn layout(&self) -> &MemoryLayout {
        &self.layout
    }

    #[inline]
    fn offset(&self, lane: u32, index: u32) -> usize {
        assert!(
            lane < self.layout.lanes && index < self.layout.lane_len,
            "block ({lane}, {index}) outside {} lanes of {} blocks",
            self.layout.lanes,
            self.layout.lane_len
        );
        lane as usize * self.layout.lane_len as usize + index as usize
    }

    /// Block `index` of `lane`.
    ///
    /// # Panics
    /// If `lane >= lanes` or `index >= lane_len`.
    #[inline]
    pub fn block(&self, lane: u32, index: u32) -> &Block {
        &self.blocks[self.offset(lane, index)]
    }

    /// Mutable block `index` of `lane`.
    ///
    /// # Panics
    /// If `lane >= lanes` or `index >= lane_len`.
    #[inline]
    pub fn block_mut(&mut self, lane: u32, index: u32) -> &mut Block {
        let offset = self.offset(lane, index);
        &mut self.blocks[offset]
    }

    /// XORs block `index` of `lane` into `dest`.
    pub fn xor_into(&self, dest: &mut Block, lane: u32, index: u32) {
        dest.in_place_xor(self.block(lane, index));
    }

    fn segment_range(&self, lane: u32, slice: u32) -> core::ops::Range<usize> {
        let start = self.offset(lane, slice * self.layout.segment_len);
        start..start + self.layout.segment_len as usize
    }

    /// Runs `f` on every lane's blocks, one worker per lane under
    /// [`Schedule::Parallel`].
    pub(crate) fn for_each_lane_mut<F>(&mut self, schedule: Schedule, f: F) -> Result<()>
    where
        F: Fn(u32, &mut [Block]) -> Result<()> + Send + Sync,
    {
        let lane_len = self.layout.lane_len as usize;
        match schedule {
            #[cfg(feature = "parallel")]
            Schedule::Parallel => self
                .blocks
                .par_chunks_mut(lane_len)
                .enumerate()
                .try_for_each(|(lane, blocks)| f(lane as u32, blocks)),
            _ => self
                .blocks
                .chunks_mut(lane_len)
                .enumerate()
                .try_for_each(|(lane, blocks)| f(lane as u32, blocks)),
        }
    }

    /// Fills all memory blocks over the specified number of passes.
    ///
    /// Each pass iterates through all 4 slices in order. Within each slice,
    /// all lanes are processed. The slice boundaries act as synchronization
    /// points: a lane can only reference blocks from other lanes that were
    /// completed in previous slices.
    pub(crate) fn fill(&mut self, variant: Variant, time: u32, schedule: Schedule) {
        for pass in 0..time {
            for slice in 0..SYNC_POINTS {
                trace!("argon2 pass {pass} slice {slice}");

                let segments = self.fill_slice(variant, time, pass, slice, schedule);

                for (lane, mut segment) in (0..self.layout.lanes).zip(segments) {
                    let range = self.segment_range(lane, slice);
                    self.blocks[range].swap_with_slice(&mut segment);
                }
            }
        }
    }

    fn fill_slice(
        &self,
        variant: Variant,
        time: u32,
        pass: u32,
        slice: u32,
        schedule: Schedule,
    ) -> Vec<Vec<Block>> {
        let work = |lane: u32| self.fill_segment(variant, time, pass, slice, lane);

        match schedule {
            #[cfg(feature = "parallel")]
            Schedule::Parallel => (0..self.layout.lanes).into_par_iter().map(work).collect(),
            _ => (0..self.layout.lanes).map(work).collect(),
        }
    }

    /// Computes one segment (portion of a lane within a slice).
    ///
    /// For each block position, this function:
    /// 1. Takes the pseudo-random value (address block or previous block)
    /// 2. Computes the reference block position from it
    /// 3. Accumulates G(reference, previous) into the block
    fn fill_segment(&self, variant: Variant, time: u32, pass: u32, slice: u32, lane: u32) -> Vec<Block> {
        let layout = &self.layout;
        let segment_start = slice * layout.segment_len;
        let mut segment = self.blocks[self.segment_range(lane, slice)].to_vec();

        let pseudo = PseudoRandom::for_segment(variant, pass, lane, slice, layout, time);

        let start_idx = if pass == 0 && slice == 0 { 2 } else { 0 };

        for i in start_idx..layout.segment_len {
            let index_in_lane = segment_start + i;
            let prev_idx = if index_in_lane == 0 {
                layout.lane_len - 1
            } else {
                index_in_lane - 1
            };

            let (done, rest) = segment.split_at_mut(i as usize);
            let view = SegmentView {
                memory: self,
                lane,
                start: segment_start,
                len: layout.segment_len,
                done,
            };

            let previous = view.get(lane, prev_idx);
            let rand = pseudo.value(i, previous);

            let position = Position {
                pass,
                lane,
                slice,
                index: i,
            };
            let (ref_lane, ref_idx) = reference_position(&position, layout, rand);
            let reference = view.get(ref_lane, ref_idx);

            Block::compress(&mut rest[0], reference, previous);
        }

        segment
    }
}

/// Read access to the arena while one lane's segment is being rebuilt.
///
/// Blocks of the segment under construction come from the working copy;
/// everything else comes from the shared arena.
struct SegmentView<'a> {
    memory: &'a Memory,
    lane: u32,
    start: u32,
    len: u32,
    done: &'a [Block],
}

impl<'a> SegmentView<'a> {
    #[inline]
    fn get(&self, lane: u32, index: u32) -> &'a Block {
        if lane == self.lane && index >= self.start && index < self.start + self.len {
            &self.done[(index - self.start) as usize]
        } else {
            self.memory.block(lane, index)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_rounds_lanes_down_to_multiple_of_four() {
        let layout = MemoryLayout::new(3, 37).unwrap();
        assert_eq!(layout.lanes, 3);
        assert_eq!(layout.lane_len, 12);
        assert_eq!(layout.segment_len, 3);
        assert_eq!(layout.total_blocks, 36);
    }

    #[test]
    fn layout_rejects_short_lanes() {
        assert!(matches!(
            MemoryLayout::new(2, 7),
            Err(crate::Error::Config(ConfigError::LaneTooShort { blocks: 3 }))
        ));
        assert!(MemoryLayout::new(2, 8).is_ok());
    }

    #[test]
    fn block_accessor_accepts_last_index() {
        let memory = Memory::new(MemoryLayout::new(2, 16).unwrap());
        let _ = memory.block(1, 7);
    }

    #[test]
    #[should_panic]
    fn block_accessor_rejects_lane_length() {
        let memory = Memory::new(MemoryLayout::new(2, 16).unwrap());
        let _ = memory.block(0, 8);
    }

    #[test]
    fn lanes_are_disjoint() {
        let mut memory = Memory::new(MemoryLayout::new(2, 16).unwrap());
        memory.block_mut(1, 0).0[0] = 42;
        assert_eq!(memory.block(0, 0).0[0], 0);
        assert_eq!(memory.block(1, 0).0[0], 42);

        let mut acc = Block::ZERO;
        memory.xor_into(&mut acc, 1, 0);
        memory.xor_into(&mut acc, 1, 0);
        assert_eq!(acc.0[0], 0);
    }

    #[test]
    fn for_each_lane_mut_visits_every_lane_once() {
        let mut memory = Memory::new(MemoryLayout::new(4, 32).unwrap());
        memory
            .for_each_lane_mut(Schedule::default(), |lane, blocks| {
                assert_eq!(blocks.len(), 8);
                blocks[0].0[0] = lane as u64 + 1;
                Ok(())
            })
            .unwrap();
        for lane in 0..4 {
            assert_eq!(memory.block(lane, 0).0[0], lane as u64 + 1);
        }
    }
}
