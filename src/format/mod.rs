//! Persisted password hash strings.
//!
//! A stored hash is a `$`-separated string whose first field is a version
//! number:
//!
//! - registered versions (2 and up): `{version}${salt}${hash}`
//! - custom (version 1): `1$p=..;m=..;i=..;bc=..${salt}${hash}`
//!
//! Salt and hash are standard base64 with padding. All hashing at this
//! layer is Argon2id without secret or associated data.

pub mod settings;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use constant_time_eq::constant_time_eq;
use log::debug;
use zeroize::Zeroizing;

use crate::derivation::argon2id;
use crate::error::{ConfigError, Error, FormatError, Result};
use crate::os::sys_random;

pub use self::settings::{CURRENT_VERSION, CUSTOM_VERSION, Settings};

/// Salt length drawn for new hashes.
pub const SALT_LEN: usize = 18;

/// Shortest hash length accepted for persisted hashes.
pub const MIN_HASH_LEN: usize = 4;

/// Parsed hash string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashGroup {
    pub settings: Settings,
    pub salt: Vec<u8>,
    pub hash: Vec<u8>,
}

impl HashGroup {
    /// Re-encodes the group. See [`format_hash`].
    pub fn encode(&self) -> Result<String> {
        format_hash(&self.settings, &self.salt, &self.hash)
    }
}

/// Renders a hash string.
///
/// # Errors
/// [`FormatError::UnknownVersion`] when `settings.version` is neither the
/// custom version nor a registered one.
pub fn format_hash(settings: &Settings, salt: &[u8], hash: &[u8]) -> Result<String> {
    let salt = STANDARD.encode(salt);
    let hash = STANDARD.encode(hash);

    if settings.version > CUSTOM_VERSION {
        Settings::get(settings.version as i64)?;
        return Ok(format!("{}${}${}", settings.version, salt, hash));
    }

    if settings.version != CUSTOM_VERSION {
        return Err(FormatError::UnknownVersion(settings.version as i64).into());
    }

    Ok(format!(
        "{}${}${}${}",
        CUSTOM_VERSION,
        settings.complexity(),
        salt,
        hash
    ))
}

/// Parses a hash string produced by [`format_hash`].
pub fn parse_hash(encoded: &str) -> Result<HashGroup> {
    let fields: Vec<&str> = encoded.split('$').collect();

    let version: i64 = fields[0]
        .parse()
        .map_err(|_| FormatError::InvalidVersion)?;
    let registered = Settings::get(version)?;

    let (settings, salt, hash) = if version == CUSTOM_VERSION as i64 {
        expect_fields(&fields, 4)?;
        (Settings::parse_complexity(fields[1])?, fields[2], fields[3])
    } else {
        expect_fields(&fields, 3)?;
        (registered, fields[1], fields[2])
    };

    Ok(HashGroup {
        settings,
        salt: STANDARD.decode(salt).map_err(FormatError::from)?,
        hash: STANDARD.decode(hash).map_err(FormatError::from)?,
    })
}

fn expect_fields(fields: &[&str], expected: usize) -> Result<()> {
    if fields.len() != expected {
        return Err(FormatError::FieldCount {
            expected,
            found: fields.len(),
        }
        .into());
    }
    Ok(())
}

/// Derives the raw hash of `password` under `settings`.
pub fn derive(password: &[u8], settings: &Settings, salt: &[u8]) -> Result<Vec<u8>> {
    let params = settings.to_params();
    if params.tag_len < MIN_HASH_LEN {
        return Err(ConfigError::OutputLength {
            requested: params.tag_len,
        }
        .into());
    }

    argon2id(password, salt, &params)
}

/// Hashes `password` with the current settings and a fresh salt.
pub fn hash_password(password: &[u8]) -> Result<String> {
    let mut salt = [0u8; SALT_LEN];
    sys_random(&mut salt)?;

    hash_password_with_salt(password, &Settings::current(), &salt)
}

/// Hashes `password` with inline parameters and a fresh salt.
///
/// `memory` is in units of 1024 KiB.
pub fn hash_password_custom(password: &[u8], parallel: u8, memory: u16, iterations: u8, bc: u8) -> Result<String> {
    let mut salt = [0u8; SALT_LEN];
    sys_random(&mut salt)?;

    let settings = Settings::custom(parallel, memory, iterations, bc);
    hash_password_with_salt(password, &settings, &salt)
}

/// Hashes `password` with explicit settings and salt.
pub fn hash_password_with_salt(password: &[u8], settings: &Settings, salt: &[u8]) -> Result<String> {
    debug!("hashing password with {}", settings);

    let hash = Zeroizing::new(derive(password, settings, salt)?);
    format_hash(settings, salt, &hash)
}

/// Checks `password` against a stored hash string.
///
/// # Errors
/// Parse errors from [`parse_hash`], and [`Error::Consistency`] when the
/// stored hash length differs from what its settings derive.
pub fn verify_password(password: &[u8], encoded: &str) -> Result<bool> {
    let group = parse_hash(encoded)?;
    debug!("verifying password against {}", group.settings);

    let derived = Zeroizing::new(derive(password, &group.settings, &group.salt)?);
    compare_hash(&derived, &group.hash)
}

/// Constant-time comparison of a derived and a stored hash.
///
/// Lengths are public; a mismatch means the stored string is corrupt.
pub fn compare_hash(derived: &[u8], stored: &[u8]) -> Result<bool> {
    if derived.len() != stored.len() {
        return Err(Error::Consistency {
            stored: stored.len(),
            derived: derived.len(),
        });
    }

    Ok(constant_time_eq(derived, stored))
}
