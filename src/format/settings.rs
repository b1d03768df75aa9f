//! Versioned hash settings.
//!
//! Every persisted hash carries a version number. Versions above 1 name a
//! fixed, registered parameter set; version 1 stores its parameters inline
//! as `p=..;m=..;i=..;bc=..`.

use core::fmt;

use crate::derivation::{Argon2Params, Schedule};
use crate::error::{FormatError, Result};

/// Version whose parameters are stored inline.
pub const CUSTOM_VERSION: u8 = 1;

/// Version used for new hashes.
pub const CURRENT_VERSION: u8 = 2;

const REGISTERED: [Settings; 2] = [
    // custom, parameters carried in the hash string
    Settings {
        version: CUSTOM_VERSION,
        parallel: 0,
        memory: 0,
        iterations: 0,
        bc: 0,
    },
    Settings {
        version: 2,
        parallel: 4,
        memory: 64,
        iterations: 3,
        bc: 33,
    },
];

/// Argon2id parameters of one hash-string version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub version: u8,
    /// Lane count.
    pub parallel: u8,
    /// Memory in units of 1024 KiB.
    pub memory: u16,
    /// Passes over memory.
    pub iterations: u8,
    /// Output length in bytes.
    pub bc: u8,
}

impl Settings {
    /// Settings used for new hashes.
    pub fn current() -> Self {
        REGISTERED[CURRENT_VERSION as usize - 1]
    }

    /// Registered settings of `version`.
    ///
    /// # Errors
    /// [`FormatError::UnknownVersion`] outside `1..=registered().len()`.
    pub fn get(version: i64) -> Result<Self> {
        if version < 1 || version > REGISTERED.len() as i64 {
            return Err(FormatError::UnknownVersion(version).into());
        }
        Ok(REGISTERED[version as usize - 1])
    }

    /// Every registered version, index 0 holding version 1.
    pub fn registered() -> &'static [Settings] {
        &REGISTERED
    }

    /// Inline (version 1) settings.
    pub fn custom(parallel: u8, memory: u16, iterations: u8, bc: u8) -> Self {
        Self {
            version: CUSTOM_VERSION,
            parallel,
            memory,
            iterations,
            bc,
        }
    }

    /// Engine parameters these settings stand for.
    pub fn to_params(&self) -> Argon2Params {
        Argon2Params {
            mem_kib: self.memory as u32 * 1024,
            time: self.iterations as u32,
            lanes: self.parallel as u32,
            tag_len: self.bc as usize,
            secret: None,
            associated_data: None,
            schedule: Schedule::default(),
        }
    }

    /// Inline form, `p=4;m=64;i=3;bc=33`.
    pub fn complexity(&self) -> String {
        format!(
            "p={};m={};i={};bc={}",
            self.parallel, self.memory, self.iterations, self.bc
        )
    }

    /// Parses the inline form.
    ///
    /// Items without exactly one `=` and unknown keys are skipped. Every
    /// one of `p`, `m`, `i` and `bc` must end up non-zero.
    pub fn parse_complexity(raw: &str) -> Result<Self> {
        let mut settings = Settings::custom(0, 0, 0, 0);

        for item in raw.split(';') {
            let mut parts = item.split('=');
            let (Some(key), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
                continue;
            };

            match key {
                "p" => settings.parallel = parse_number(key, value)?,
                "m" => settings.memory = parse_number(key, value)?,
                "i" => settings.iterations = parse_number(key, value)?,
                "bc" => settings.bc = parse_number(key, value)?,
                _ => {}
            }
        }

        if settings.parallel == 0 || settings.memory == 0 || settings.iterations == 0 || settings.bc == 0 {
            return Err(FormatError::MissingSetting.into());
        }

        Ok(settings)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v={};{}", self.version, self.complexity())
    }
}

fn parse_number<T: core::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| FormatError::InvalidSetting(key.to_string()).into())
}
