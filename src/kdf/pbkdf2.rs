//! src/kdf/pbkdf2.rs
//! PBKDF2-HMAC (RFC 8018) with SHA-1, SHA-256 and SHA-512
//!
//! The HMAC is always keyed by the password; the salt and block index are the
//! message. scrypt uses the SHA-256 variant with a single iteration.

use crate::aliases::{HmacSha1, HmacSha256, HmacSha512};
use crate::error::ScryptError;

use hmac::digest::{FixedOutput, KeyInit, Update};
use pbkdf2::pbkdf2;

#[inline(always)]
fn check(iterations: u32, output_len: usize) -> Result<(), ScryptError> {
    if iterations == 0 {
        return Err(ScryptError::Pbkdf2("PBKDF2 iterations must be ≥1".into()));
    }
    if output_len == 0 {
        return Err(ScryptError::Pbkdf2("PBKDF2 output length must be ≥1".into()));
    }
    Ok(())
}

#[inline(always)]
fn derive_into<PRF>(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<(), ScryptError>
where
    PRF: KeyInit + Update + FixedOutput + Clone + Sync,
{
    check(iterations, out.len())?;
    pbkdf2::<PRF>(password, salt, iterations, out)
        .map_err(|e| ScryptError::Pbkdf2(format!("PBKDF2 failed: {e}")))
}

/// PBKDF2-HMAC-SHA256 directly into a caller buffer. Used internally by scrypt.
#[inline(always)]
pub fn pbkdf2_hmac_sha256_into(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<(), ScryptError> {
    derive_into::<HmacSha256>(password, salt, iterations, out)
}

/// PBKDF2-HMAC-SHA1. Functionally equivalent to .NET's `Rfc2898DeriveBytes` default.
pub fn pbkdf2_hmac_sha1(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    output_len: usize,
) -> Result<Vec<u8>, ScryptError> {
    let mut out = vec![0u8; output_len];
    derive_into::<HmacSha1>(password, salt, iterations, &mut out)?;
    Ok(out)
}

/// PBKDF2-HMAC-SHA256.
pub fn pbkdf2_hmac_sha256(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    output_len: usize,
) -> Result<Vec<u8>, ScryptError> {
    let mut out = vec![0u8; output_len];
    pbkdf2_hmac_sha256_into(password, salt, iterations, &mut out)?;
    Ok(out)
}

/// PBKDF2-HMAC-SHA512.
pub fn pbkdf2_hmac_sha512(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    output_len: usize,
) -> Result<Vec<u8>, ScryptError> {
    let mut out = vec![0u8; output_len];
    derive_into::<HmacSha512>(password, salt, iterations, &mut out)?;
    Ok(out)
}
