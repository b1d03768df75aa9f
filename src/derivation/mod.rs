//! Key and password derivation functions.
//!
//! Currently provides Argon2 (d, i and id) built on the crate's own BLAKE2b.

pub mod argon2;

pub use self::argon2::core::{argon2, argon2d, argon2i, argon2id, hash};
pub use self::argon2::params::{Argon2Params, Schedule, Variant};
