//! Hash functions exposed by the crate.
//!
//! Includes BLAKE2b and the variable-length extension H′ built on top of
//! it, both pure-Rust implementations.

pub mod blake2b;
pub mod hprime;

/// Re-export of the BLAKE2b hasher and convenience functions.
pub use self::blake2b::{Blake2b, blake2b, blake2b_keyed};

/// Re-export of H′.
pub use self::hprime::{blake2b_long, blake2b_long_into};
