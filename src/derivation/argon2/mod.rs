//! Argon2 password hashing function (RFC 9106), version 1.3.
//!
//! Argon2 is a memory-hard password hashing function designed to resist
//! GPU-based brute-force attacks. All three variants are provided; they
//! differ only in how reference blocks are addressed.
//!
//! # Algorithm Overview
//!
//! 1. **Initialization**: Compute H0 = BLAKE2b(params || password || salt || ...)
//! 2. **Lane initialization**: Generate the first two blocks of each lane
//!    using H' (variable-length BLAKE2b).
//! 3. **Memory filling**: Fill the remaining blocks using the compression
//!    function G, which is based on the BLAKE2b round function with
//!    additional multiplication for diffusion.
//! 4. **Finalization**: XOR the last block of each lane together and apply
//!    H' to produce the final tag.
//!
//! # Memory Organization
//!
//! Memory is organized as a matrix of 1024-byte blocks:
//! - **Lanes**: independent rows that can be processed in parallel.
//! - **Slices**: each lane is divided into 4 slices (sync points).
//! - **Segments**: blocks within a slice.
//!
//! # Addressing Modes
//!
//! - **Data-independent** (Argon2i, and Argon2id for the first pass,
//!   slices 0-1): block addresses are computed from a counter, providing
//!   side-channel resistance.
//! - **Data-dependent** (Argon2d, and Argon2id everywhere else): block
//!   addresses depend on previously computed block contents, providing
//!   better security against time-memory trade-off attacks.

pub mod addressing;
pub mod block;
pub(crate) mod boundary;
pub mod core;
pub mod memory;
pub mod params;
pub mod reference;
