use log::debug;
use zeroize::Zeroize;

use super::boundary::{finalize, init, seed_lanes};
use super::memory::{Memory, MemoryLayout};
use super::params::{Argon2Params, SYNC_POINTS, Schedule, Variant, check_input_len};
use crate::error::Result;

/// Computes an Argon2 hash of the given password.
///
/// # Arguments
///
/// * `variant` - Argon2d, Argon2i or Argon2id
/// * `password` - The password to hash
/// * `salt` - A random salt (16+ bytes recommended)
/// * `params` - Argon2 parameters (memory, time, parallelism, tag length)
///
/// # Returns
///
/// The derived key (tag) as a byte vector, or an error if parameters are
/// invalid. Parameters are checked before any memory is allocated.
///
/// # Example
///
/// ```rust
/// use cryptal_argon2::derivation::{Argon2Params, Variant, argon2};
///
/// let params = Argon2Params {
///     mem_kib: 64,
///     time: 1,
///     lanes: 2,
///     ..Argon2Params::default()
/// };
///
/// let tag = argon2(Variant::Argon2id, b"my_password", b"random_salt_16b!", &params).unwrap();
/// assert_eq!(tag.len(), 32);
/// ```
pub fn argon2(variant: Variant, password: &[u8], salt: &[u8], params: &Argon2Params) -> Result<Vec<u8>> {
    params.validate()?;
    check_input_len("password", Some(password))?;
    check_input_len("salt", Some(salt))?;

    // At least two blocks per segment; m' = 4p * floor(m / 4p)
    let blocks = params.mem_kib.max(2 * SYNC_POINTS * params.lanes);
    let layout = MemoryLayout::new(params.lanes, blocks)?;

    debug!(
        "argon2 {:?}: {} lanes of {} blocks, {} passes, {}-byte tag, {:?}",
        variant, layout.lanes, layout.lane_len, params.time, params.tag_len, params.schedule
    );

    let mut memory = Memory::new(layout);

    {
        let h0 = init(variant, password, salt, params)?;
        seed_lanes(&mut memory, &h0, params.schedule)?;
    }

    memory.fill(variant, params.time, params.schedule);

    finalize(&memory, params.tag_len)
}

/// Computes an Argon2id hash. See [`argon2`].
pub fn argon2id(password: &[u8], salt: &[u8], params: &Argon2Params) -> Result<Vec<u8>> {
    argon2(Variant::Argon2id, password, salt, params)
}

/// Computes an Argon2i hash. See [`argon2`].
pub fn argon2i(password: &[u8], salt: &[u8], params: &Argon2Params) -> Result<Vec<u8>> {
    argon2(Variant::Argon2i, password, salt, params)
}

/// Computes an Argon2d hash. See [`argon2`].
pub fn argon2d(password: &[u8], salt: &[u8], params: &Argon2Params) -> Result<Vec<u8>> {
    argon2(Variant::Argon2d, password, salt, params)
}

/// Argon2id hashing entry point with every parameter spelled out.
///
/// `memory_kib` must be at least `4 * parallelism`, `iterations` and
/// `parallelism` at least 1, `output_len` in `1..=1024`.
#[allow(clippy::too_many_arguments)]
pub fn hash(
    password: &[u8],
    salt: &[u8],
    secret: Option<&[u8]>,
    associated_data: Option<&[u8]>,
    parallelism: u32,
    iterations: u32,
    memory_kib: u32,
    output_len: usize,
) -> Result<Vec<u8>> {
    let mut params = Argon2Params {
        mem_kib: memory_kib,
        time: iterations,
        lanes: parallelism,
        tag_len: output_len,
        secret: secret.map(<[u8]>::to_vec),
        associated_data: associated_data.map(<[u8]>::to_vec),
        schedule: Schedule::default(),
    };

    let tag = argon2id(password, salt, &params);

    params.secret.zeroize();
    params.associated_data.zeroize();

    tag
}
