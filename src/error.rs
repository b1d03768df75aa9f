//! Error types shared by every layer of the crate.
//!
//! Failures fall into three families:
//! - configuration errors, raised before any hashing work starts
//! - format errors, raised while parsing a persisted hash string
//! - consistency errors, raised when a stored hash cannot possibly match
//!   the settings it was stored with
//!
//! None of them are transient. Hashing is deterministic, so retrying a
//! failed call reproduces the same error.

use thiserror::Error;

/// Invalid parameters passed to BLAKE2b, H′ or the Argon2 engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// At least one lane is required.
    #[error("parallelism must be at least 1")]
    TooFewLanes,
    /// Lane count exceeds 2^24 - 1.
    #[error("parallelism must be below 2^24")]
    TooManyLanes,
    /// At least one pass over memory is required.
    #[error("iterations must be at least 1")]
    TooFewPasses,
    /// Memory must be at least 4 KiB per lane.
    #[error("memory size {requested} KiB is below the minimum of {minimum} KiB")]
    MemoryTooSmall { minimum: u64, requested: u32 },
    /// Argon2 tag or H′ output outside 1..=1024 bytes.
    #[error("output length {requested} is outside 1..=1024 bytes")]
    OutputLength { requested: usize },
    /// BLAKE2b digest outside 1..=64 bytes.
    #[error("BLAKE2b digest length {requested} is outside 1..=64 bytes")]
    DigestLength { requested: usize },
    /// BLAKE2b key longer than 64 bytes.
    #[error("BLAKE2b key of {length} bytes exceeds 64 bytes")]
    KeyLength { length: usize },
    /// An input does not fit its 32-bit length prefix.
    #[error("{field} is longer than 2^32 - 1 bytes")]
    InputTooLong { field: &'static str },
    /// A lane must hold at least one block per slice.
    #[error("lanes of {blocks} blocks are shorter than the 4-block minimum")]
    LaneTooShort { blocks: u32 },
}

/// Malformed persisted hash string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("expected {expected} `$`-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },
    #[error("version field is not a number")]
    InvalidVersion,
    #[error("unsupported version {0}")]
    UnknownVersion(i64),
    #[error("setting `{0}` is not a valid number")]
    InvalidSetting(String),
    #[error("missing or zero hash settings")]
    MissingSetting,
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot verify: {0}")]
    Format(#[from] FormatError),
    /// The decoded hash does not have the length its settings produce.
    #[error("stored hash is {stored} bytes but settings derive {derived} bytes")]
    Consistency { stored: usize, derived: usize },
    #[error("operating system entropy unavailable: {0}")]
    Entropy(#[from] getrandom::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
