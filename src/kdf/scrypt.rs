//! src/kdf/scrypt.rs
//! RFC 7914 scrypt
//!
//! ```text
//! B  = PBKDF2-HMAC-SHA256(P, S, 1, p * 128 * r)
//! B[i] = ROMix(B[i], N)        for each of the p lanes
//! DK = PBKDF2-HMAC-SHA256(P, B, 1, dkLen)
//! ```
//!
//! Every working buffer (`B`, the per-lane `V` table and its scratch blocks)
//! is zeroized on drop.

use crate::consts::DEFAULT_OUTPUT_LEN;
use crate::crypto::mix::{block_words, ro_mix};
use crate::error::ScryptError;
use crate::kdf::pbkdf2::pbkdf2_hmac_sha256_into;
use crate::params::ScryptParams;

use log::{debug, trace};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use zeroize::Zeroizing;

/// Scratch memory for one ROMix lane. Reused across lanes on the sequential path.
struct LaneScratch {
    x: Zeroizing<Vec<u32>>,
    v: Zeroizing<Vec<u32>>,
    t: Zeroizing<Vec<u32>>,
}

impl LaneScratch {
    fn new(params: &ScryptParams) -> Self {
        let words = block_words(params.r() as usize);
        Self {
            x: Zeroizing::new(vec![0u32; words]),
            v: Zeroizing::new(vec![0u32; words * params.n() as usize]),
            t: Zeroizing::new(vec![0u32; words]),
        }
    }

    /// Run ROMix over one `128 * r`-byte lane of `B`, in place.
    fn mix(&mut self, lane: &mut [u8], params: &ScryptParams) {
        for (w, c) in self.x.iter_mut().zip(lane.chunks_exact(4)) {
            *w = u32::from_le_bytes([c[0], c[1], c[2], c[3]]);
        }

        ro_mix(
            &mut self.x,
            params.n(),
            params.r() as usize,
            &mut self.v,
            &mut self.t,
        );

        for (c, w) in lane.chunks_exact_mut(4).zip(self.x.iter()) {
            c.copy_from_slice(&w.to_le_bytes());
        }
    }
}

fn mix_lanes_sequential(b: &mut [u8], params: &ScryptParams) {
    let mut scratch = LaneScratch::new(params);
    for lane in b.chunks_exact_mut(params.block_bytes()) {
        scratch.mix(lane, params);
    }
}

#[cfg(feature = "parallel")]
fn mix_lanes(b: &mut [u8], params: &ScryptParams) {
    if params.p() == 1 {
        return mix_lanes_sequential(b, params);
    }
    b.par_chunks_exact_mut(params.block_bytes()).for_each_init(
        || LaneScratch::new(params),
        |scratch, lane| scratch.mix(lane, params),
    );
}

#[cfg(not(feature = "parallel"))]
fn mix_lanes(b: &mut [u8], params: &ScryptParams) {
    mix_lanes_sequential(b, params);
}

fn derive_inner(
    password: &[u8],
    salt: &[u8],
    params: &ScryptParams,
    mixer: fn(&mut [u8], &ScryptParams),
) -> Result<Vec<u8>, ScryptError> {
    if salt.is_empty() {
        return Err(ScryptError::InvalidSalt);
    }

    debug!(
        "scrypt: N={} r={} p={} dkLen={} (~{} KiB working memory)",
        params.n(),
        params.r(),
        params.p(),
        params.output_len(),
        params.memory_bytes() / 1024
    );

    let mut b = Zeroizing::new(vec![0u8; params.p() as usize * params.block_bytes()]);
    pbkdf2_hmac_sha256_into(password, salt, 1, &mut b)?;

    mixer(&mut b, params);

    let mut output = vec![0u8; params.output_len()];
    pbkdf2_hmac_sha256_into(password, &b, 1, &mut output)?;

    trace!("scrypt: derivation complete");
    Ok(output)
}

/// Derive a key with pre-validated parameters.
///
/// The password may be empty; the salt may not.
///
/// With the `parallel` feature (default) the `p` lanes run on the rayon pool,
/// each with its own `V` table.
///
/// # Errors
///
/// - [`ScryptError::InvalidSalt`] if `salt` is empty
pub fn derive_with_params(
    password: &[u8],
    salt: &[u8],
    params: &ScryptParams,
) -> Result<Vec<u8>, ScryptError> {
    derive_inner(password, salt, params, mix_lanes)
}

/// Same as [`derive_with_params`] but always runs the lanes one after another,
/// reusing a single `V` table. Lowest peak memory.
pub fn derive_with_params_sequential(
    password: &[u8],
    salt: &[u8],
    params: &ScryptParams,
) -> Result<Vec<u8>, ScryptError> {
    derive_inner(password, salt, params, mix_lanes_sequential)
}

/// RFC 7914 scrypt.
///
/// - `password`: `P`, may be empty
/// - `salt`: `S`, must not be empty
/// - `n`: CPU/memory cost, a power of two > 1
/// - `r`: block size
/// - `p`: parallelism
/// - `output_len`: a non-zero multiple of 32
///
/// # Example
///
/// ```
/// use scrypt_hash::compute_derived_hash;
///
/// let dk = compute_derived_hash(b"password", b"NaCl", 16, 1, 1, 64)?;
/// assert_eq!(dk.len(), 64);
/// # Ok::<(), scrypt_hash::ScryptError>(())
/// ```
pub fn compute_derived_hash(
    password: &[u8],
    salt: &[u8],
    n: u64,
    r: u32,
    p: u32,
    output_len: usize,
) -> Result<Vec<u8>, ScryptError> {
    if salt.is_empty() {
        return Err(ScryptError::InvalidSalt);
    }
    let params = ScryptParams::new(n, r, p, output_len)?;
    derive_with_params(password, salt, &params)
}

/// [`compute_derived_hash`] with the default 32-byte output.
pub fn compute_derived_hash_default(
    password: &[u8],
    salt: &[u8],
    n: u64,
    r: u32,
    p: u32,
) -> Result<Vec<u8>, ScryptError> {
    compute_derived_hash(password, salt, n, r, p, DEFAULT_OUTPUT_LEN)
}
