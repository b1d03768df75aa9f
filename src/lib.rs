//! Argon2 password hashing on a from-scratch BLAKE2b
//!
//! This crate provides the Argon2 memory-hard password hashing function
//! (Argon2d, Argon2i and Argon2id, version 1.3) together with the hash
//! primitives it is built from, and a small versioned format for storing
//! password hashes.
//!
//! The focus is on **clarity, predictability, and auditability**. Every
//! layer validates its parameters before doing work and reports failures
//! through a single [`Error`] type. Secret material is zeroized once it is
//! no longer needed.
//!
//! # Module overview
//!
//! - `encoding`
//!   Little-endian framing of lengths, words and byte strings, streamed
//!   into the hash functions without building intermediate buffers.
//!
//! - `hash`
//!   BLAKE2b (RFC 7693), keyed and unkeyed, and the variable-length
//!   extension H′ used by Argon2 to produce outputs longer than 64 bytes.
//!
//! - `derivation`
//!   The Argon2 engine: parameter validation, the block compression
//!   function, reference indexing, address generation, and the lane
//!   scheduler that fills memory one slice at a time.
//!
//! - `format`
//!   Versioned password hash strings (`{version}${salt}${hash}`), salt
//!   generation, and constant-time verification.
//!
//! # Logging
//!
//! Diagnostics go through the `log` facade; nothing is printed unless the
//! application installs a logger. Passwords, secrets and derived hashes are
//! never logged.

mod os;

pub mod derivation;
pub mod encoding;
pub mod error;
pub mod format;
pub mod hash;

pub use derivation::{Argon2Params, Schedule, Variant, argon2, argon2d, argon2i, argon2id};
pub use error::{ConfigError, Error, FormatError, Result};
pub use format::{hash_password, hash_password_custom, hash_password_with_salt, verify_password};
