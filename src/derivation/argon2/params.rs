//! Parameter definitions and validation for Argon2.
//!
//! This module defines the configurable parameters for Argon2 and provides
//! validation to ensure they meet the algorithm's requirements. Validation
//! always runs before any memory is allocated.

use crate::error::{ConfigError, Result};

/// Number of slices per lane and pass.
pub const SYNC_POINTS: u32 = 4;

/// Largest supported tag length in bytes.
pub const MAX_TAG_LEN: usize = 1024;

/// Largest lane count (2^24 - 1).
pub const MAX_LANES: u32 = 0x00ff_ffff;

/// Argon2 variant, identified by its RFC 9106 type number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Data-dependent addressing throughout.
    Argon2d = 0,
    /// Data-independent addressing throughout.
    Argon2i = 1,
    /// Data-independent for the first half of the first pass, then
    /// data-dependent.
    Argon2id = 2,
}

impl Variant {
    /// Type number absorbed into H0 and the address generator input.
    pub fn type_id(self) -> u32 {
        self as u32
    }
}

/// How lanes are scheduled within a slice.
///
/// Both schedules produce identical output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    /// One worker walks the lanes in order.
    Sequential,
    /// One worker per lane. Requires the `parallel` feature, otherwise
    /// behaves like [`Schedule::Sequential`].
    Parallel,
}

impl Default for Schedule {
    fn default() -> Self {
        if cfg!(feature = "parallel") {
            Schedule::Parallel
        } else {
            Schedule::Sequential
        }
    }
}

/// Configuration parameters for the Argon2 algorithm.
///
/// These parameters control the memory and time cost of the hash function,
/// allowing the security level to be tuned for the target hardware and
/// threat model.
#[derive(Clone, Debug)]
pub struct Argon2Params {
    /// Memory size in KiB (minimum 4 × lanes).
    pub mem_kib: u32,
    /// Number of passes over memory (minimum 1).
    pub time: u32,
    /// Degree of parallelism (number of lanes, minimum 1).
    pub lanes: u32,
    /// Length of the output tag in bytes (1..=1024).
    pub tag_len: usize,
    /// Optional secret key for keyed hashing.
    pub secret: Option<Vec<u8>>,
    /// Optional associated data.
    pub associated_data: Option<Vec<u8>>,
    /// Lane scheduling strategy.
    pub schedule: Schedule,
}

impl Argon2Params {
    /// Checks every numeric parameter and the optional inputs.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<()> {
        if self.lanes < 1 {
            return Err(ConfigError::TooFewLanes.into());
        }

        if self.lanes > MAX_LANES {
            return Err(ConfigError::TooManyLanes.into());
        }

        if self.time < 1 {
            return Err(ConfigError::TooFewPasses.into());
        }

        let minimum = SYNC_POINTS as u64 * self.lanes as u64;
        if (self.mem_kib as u64) < minimum {
            return Err(ConfigError::MemoryTooSmall {
                minimum,
                requested: self.mem_kib,
            }
            .into());
        }

        if self.tag_len < 1 || self.tag_len > MAX_TAG_LEN {
            return Err(ConfigError::OutputLength {
                requested: self.tag_len,
            }
            .into());
        }

        check_input_len("secret", self.secret.as_deref())?;
        check_input_len("associated data", self.associated_data.as_deref())?;

        Ok(())
    }
}

impl Default for Argon2Params {
    /// Default parameters: 64 MiB memory, 3 passes, 4 lanes, 32-byte tag.
    fn default() -> Self {
        Self {
            mem_kib: 64 * 1024,
            time: 3,
            lanes: 4,
            tag_len: 32,
            secret: None,
            associated_data: None,
            schedule: Schedule::default(),
        }
    }
}

/// Rejects inputs whose length does not fit the 32-bit prefix.
pub(crate) fn check_input_len(field: &'static str, bytes: Option<&[u8]>) -> Result<()> {
    match bytes {
        Some(bytes) if u32::try_from(bytes.len()).is_err() => {
            Err(ConfigError::InputTooLong { field }.into())
        }
        _ => Ok(()),
    }
}
