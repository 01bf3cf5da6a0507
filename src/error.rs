//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, ScryptError>`](ScryptError).

use thiserror::Error;

/// The error type for all scrypt operations.
///
/// Covers parameter validation, PBKDF2 failures, encoded-hash parsing,
/// randomness failures and test-vector loading.
#[derive(Error, Debug)]
pub enum ScryptError {
    /// I/O error while reading a test-vector file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A test-vector file is not valid JSON or has the wrong shape.
    #[error("Vector file error: {0}")]
    Json(#[from] serde_json::Error),

    /// The salt was empty. scrypt requires a non-empty salt.
    #[error("Salt cannot be empty")]
    InvalidSalt,

    /// The CPU/memory cost `N` is not a power of two greater than 1.
    #[error("Cost (N) must be a power of 2 and greater than 1, got {0}")]
    InvalidCost(u64),

    /// The block size `r` was zero.
    #[error("Block size (r) must be at least 1")]
    InvalidBlockSize,

    /// The parallelism `p` was zero.
    #[error("Parallelism (p) must be at least 1")]
    InvalidParallelism,

    /// The combination of `N`, `r` and `p` exceeds the supported memory bounds.
    #[error("Combined parameter values are too large")]
    ParametersTooLarge,

    /// Requested output length is zero or not a multiple of 32.
    #[error("Output length must be a multiple of 32 and greater than 0, got {0}")]
    InvalidOutputLength(usize),

    /// PBKDF2 rejected its inputs.
    #[error("PBKDF2 error: {0}")]
    Pbkdf2(String),

    /// `compare` was called with an empty password.
    #[error("Password cannot be empty")]
    EmptyPassword,

    /// `compare` or `parse` was called with a blank encoded hash.
    #[error("Encoded hash cannot be empty")]
    EmptyHash,

    /// Encoded hash string is malformed.
    ///
    /// Used for wrong segment counts, non-numeric parameters and bad hex configs.
    #[error("Format error: {0}")]
    Format(String),

    /// Salt or hash segment is not valid base64.
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Parameters do not fit the single-byte fields of the legacy `$s0$`/`$s1$` layout.
    #[error("Parameter overflow in legacy encoding")]
    ParameterOverflow,

    /// Encoded hash carries a version this library does not know.
    #[error("Unsupported version: {0}")]
    UnsupportedVersion(u8),

    /// The operating system RNG failed.
    #[error("RNG error: {0}")]
    Rng(String),
}

impl From<std::num::ParseIntError> for ScryptError {
    fn from(e: std::num::ParseIntError) -> Self {
        ScryptError::Format(format!("invalid number: {e}"))
    }
}
