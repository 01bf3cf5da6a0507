// src/crypto/rng.rs
//! Secure randomness for salts
//!
//! Thread-local `OsRng`. RNG failure is surfaced as [`ScryptError::Rng`].

use crate::aliases::Salt32;
use crate::consts::DEFAULT_SALT_LEN;
use crate::error::ScryptError;
use rand::{rngs::OsRng, TryRngCore};
use secure_gate::Fixed;
#[cfg(test)]
use secure_gate::RevealSecret;
use std::cell::RefCell;

thread_local! {
    static RNG: RefCell<OsRng> = const { RefCell::new(OsRng) };
}

fn fill(dest: &mut [u8]) -> Result<(), ScryptError> {
    RNG.with(|rng_cell| {
        rng_cell
            .borrow_mut()
            .try_fill_bytes(dest)
            .map_err(|e| ScryptError::Rng(e.to_string()))
    })
}

/// Generate a random salt of `len` bytes.
pub fn generate_salt(len: usize) -> Result<Vec<u8>, ScryptError> {
    let mut salt = vec![0u8; len];
    fill(&mut salt)?;
    Ok(salt)
}

/// Generate a random salt of the default length (32 bytes) in a fixed-size buffer.
pub fn generate_salt32() -> Result<Salt32, ScryptError> {
    let mut bytes = [0u8; DEFAULT_SALT_LEN];
    fill(&mut bytes)?;
    Ok(Fixed::new(bytes))
}
