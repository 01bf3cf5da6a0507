//! src/encoder.rs
//! Password hashing with self-describing output
//!
//! Free functions ([`encode`], [`compare`]) plus the object-based
//! [`ScryptEncoder`], which fixes the parameters once and hashes many
//! passwords with them.

use crate::aliases::PasswordBytes;
use crate::crypto::compare::safe_equals;
use crate::crypto::rng::generate_salt32;
use crate::error::ScryptError;
use crate::header::EncodedHash;
use crate::kdf::scrypt::derive_with_params;
use crate::params::ScryptParams;

use log::debug;
use secure_gate::RevealSecret;
use zeroize::Zeroizing;

fn encode_with_params(
    password: &[u8],
    salt: Option<&[u8]>,
    params: &ScryptParams,
) -> Result<String, ScryptError> {
    // if they didn't provide one, we will
    let salt = match salt {
        Some(s) => s.to_vec(),
        None => generate_salt32()?.expose_secret().to_vec(),
    };
    let hash = derive_with_params(password, &salt, params)?;
    Ok(EncodedHash::new(params, salt, hash).to_string())
}

/// Derive and encode as `$s2$N$r$p$<salt>$<hash>`.
///
/// `salt = None` generates a random 32-byte salt, which is what ends up in the
/// encoded string.
///
/// # Errors
///
/// Any parameter error from [`ScryptParams::new`], [`ScryptError::InvalidSalt`] for
/// `Some(&[])`, or [`ScryptError::Rng`] if salt generation fails.
///
/// # Example
///
/// ```
/// use scrypt_hash::{compare, encode};
///
/// let encoded = encode(b"hunter2", None, 16, 1, 1, 32)?;
/// assert!(encoded.starts_with("$s2$16$1$1$"));
/// assert!(compare(&encoded, b"hunter2")?);
/// assert!(!compare(&encoded, b"hunter3")?);
/// # Ok::<(), scrypt_hash::ScryptError>(())
/// ```
pub fn encode(
    password: &[u8],
    salt: Option<&[u8]>,
    n: u64,
    r: u32,
    p: u32,
    output_len: usize,
) -> Result<String, ScryptError> {
    let params = ScryptParams::new(n, r, p, output_len)?;
    encode_with_params(password, salt, &params)
}

/// [`encode`] for a UTF-8 string password.
pub fn encode_str(
    password: &str,
    salt: Option<&[u8]>,
    n: u64,
    r: u32,
    p: u32,
    output_len: usize,
) -> Result<String, ScryptError> {
    encode(password.as_bytes(), salt, n, r, p, output_len)
}

/// Check `password` against an encoded hash.
///
/// Re-derives with the stored parameters and salt (output length = stored hash
/// length) and compares in constant time.
///
/// # Errors
///
/// - [`ScryptError::EmptyHash`] for a blank `encoded`
/// - [`ScryptError::EmptyPassword`] for an empty `password`
/// - parse errors from [`EncodedHash::parse`] and parameter errors from the stored values
pub fn compare(encoded: &str, password: &[u8]) -> Result<bool, ScryptError> {
    if encoded.trim().is_empty() {
        return Err(ScryptError::EmptyHash);
    }
    if password.is_empty() {
        return Err(ScryptError::EmptyPassword);
    }

    let header = EncodedHash::parse(encoded)?;
    debug!("compare: encoded hash version {}", header.version());
    let params = header.params()?;
    let derived = Zeroizing::new(derive_with_params(password, header.salt(), &params)?);

    Ok(safe_equals(&derived, header.hash()))
}

/// [`compare`] for a UTF-8 string password.
pub fn compare_str(encoded: &str, password: &str) -> Result<bool, ScryptError> {
    compare(encoded, password.as_bytes())
}

/// Object-based encoder: parameters (and optionally a salt) fixed at construction.
///
/// Produces output identical to [`encode`] for the same inputs.
///
/// # Thread Safety
///
/// This type is **thread-safe** (`Send + Sync`). `encode` takes `&self`, so one
/// encoder can be shared across threads.
///
/// # Example
///
/// ```
/// use scrypt_hash::ScryptEncoder;
///
/// let encoder = ScryptEncoder::new(1024, 8, 1, 32, None)?;
/// let encoded = encoder.encode(b"correct horse")?;
/// assert!(encoder.verify(&encoded, b"correct horse")?);
/// # Ok::<(), scrypt_hash::ScryptError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScryptEncoder {
    params: ScryptParams,
    salt: Option<Vec<u8>>,
}

impl ScryptEncoder {
    /// Create an encoder; parameters are validated eagerly.
    ///
    /// `salt = None` draws a fresh random salt on every [`encode`](Self::encode).
    pub fn new(
        n: u64,
        r: u32,
        p: u32,
        output_len: usize,
        salt: Option<Vec<u8>>,
    ) -> Result<Self, ScryptError> {
        if salt.as_ref().is_some_and(Vec::is_empty) {
            return Err(ScryptError::InvalidSalt);
        }
        Ok(Self {
            params: ScryptParams::new(n, r, p, output_len)?,
            salt,
        })
    }

    /// Build from already-validated parameters.
    #[must_use]
    pub fn from_params(params: ScryptParams) -> Self {
        Self { params, salt: None }
    }

    /// Pin the salt used by every subsequent `encode`.
    ///
    /// An empty salt is reported by `encode`.
    #[must_use]
    pub fn with_salt(mut self, salt: impl Into<Vec<u8>>) -> Self {
        self.salt = Some(salt.into());
        self
    }

    /// Change the derived-key length.
    pub fn with_output_len(mut self, output_len: usize) -> Result<Self, ScryptError> {
        self.params = self.params.with_output_len(output_len)?;
        Ok(self)
    }

    #[must_use]
    pub const fn params(&self) -> &ScryptParams {
        &self.params
    }

    /// The pinned salt, if any.
    #[must_use]
    pub fn salt(&self) -> Option<&[u8]> {
        self.salt.as_deref()
    }

    /// Hash `password` with this encoder's parameters.
    pub fn encode(&self, password: &[u8]) -> Result<String, ScryptError> {
        encode_with_params(password, self.salt.as_deref(), &self.params)
    }

    /// [`encode`](Self::encode) for a UTF-8 string password.
    pub fn encode_str(&self, password: &str) -> Result<String, ScryptError> {
        self.encode(password.as_bytes())
    }

    /// [`encode`](Self::encode) for a zeroizing password buffer.
    pub fn encode_secret(&self, password: &PasswordBytes) -> Result<String, ScryptError> {
        self.encode(password.expose_secret())
    }

    /// Check a password against an encoded hash.
    ///
    /// Uses the parameters stored in `encoded`, not this encoder's.
    pub fn verify(&self, encoded: &str, password: &[u8]) -> Result<bool, ScryptError> {
        compare(encoded, password)
    }
}
