//! Reference block position computation for Argon2.
//!
//! When filling a block at position (lane, index), Argon2 needs to select
//! a reference block to mix with the previous block. The selection algorithm
//! uses a 64-bit pseudo-random value J2 || J1 to determine which block to
//! reference, with constraints to ensure the referenced block has already
//! been computed and is not being written by another lane.

use super::memory::MemoryLayout;
use super::params::SYNC_POINTS;

/// Coordinates of the block being computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub pass: u32,
    pub lane: u32,
    pub slice: u32,
    /// Index within the current segment.
    pub index: u32,
}

/// Computes the reference block for the Argon2 filling algorithm.
///
/// The high 32 bits of `pseudo_rand` pick the lane, the low 32 bits the
/// block inside the allowed reference area:
/// - On the first pass, first slice: only earlier blocks in the same lane
/// - Otherwise: blocks from any lane, but never from another lane's
///   current segment, and never the block right before the current one
///
/// The mapping uses a non-uniform distribution (phi function) that biases
/// toward more recently computed blocks.
///
/// Returns `(reference_lane, reference_index)`.
pub fn reference_position(position: &Position, layout: &MemoryLayout, pseudo_rand: u64) -> (u32, u32) {
    let Position {
        pass,
        lane,
        slice,
        index,
    } = *position;
    let segment_len = layout.segment_len;
    let lane_len = layout.lane_len;

    let ref_lane = if pass == 0 && slice == 0 {
        lane
    } else {
        ((pseudo_rand >> 32) % layout.lanes as u64) as u32
    };

    let same_lane = ref_lane == lane;
    let skip_last = u32::from(index == 0);

    let reference_area_size = if pass == 0 {
        if slice == 0 {
            index - 1
        } else if same_lane {
            slice * segment_len + index - 1
        } else {
            slice * segment_len - skip_last
        }
    } else if same_lane {
        lane_len - segment_len + index - 1
    } else {
        lane_len - segment_len - skip_last
    };
    debug_assert!(reference_area_size > 0);

    // Phi function: x = J1² / 2³², relative_position = W - 1 - (W × x / 2³²)
    let j1 = pseudo_rand & 0xffff_ffff;
    let x = (j1 * j1) >> 32;
    let area = reference_area_size as u64;
    let relative_position = area - 1 - ((area * x) >> 32);

    let start_position = if pass == 0 || slice == SYNC_POINTS - 1 {
        0
    } else {
        (slice + 1) * segment_len
    };

    let ref_index = (start_position as u64 + relative_position) % lane_len as u64;

    (ref_lane, ref_index as u32)
}
