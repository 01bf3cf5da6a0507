//! # Encoded Hash Format
//!
//! Self-describing string form of a derived hash: the cost parameters, salt
//! and hash travel together so [`compare`](crate::compare) can re-derive.
//!
//! # Layouts
//!
//! - **v2** (current): `$s2$<N>$<r>$<p>$<base64 salt>$<base64 hash>`
//! - **v0 / v1** (legacy, read and write): `$s<0|1>$<hex config>$<base64 salt>$<base64 hash>`
//!   where `config = N << 16 | r << 8 | p` in lowercase hex without padding.
//!   `N` occupies 16 bits, `r` and `p` 8 bits each.
//!
//! Base64 is the standard alphabet with padding.

use crate::consts::{LEGACY_N_MAX, LEGACY_RP_MAX, SCRYPT_LATEST_VERSION};
use crate::error::ScryptError;
use crate::params::ScryptParams;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::fmt;
use std::str::FromStr;

/// A parsed or freshly produced encoded hash.
///
/// Constructors enforce that the parameters fit the chosen layout, so
/// formatting with [`Display`](fmt::Display) never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedHash {
    version: u8,
    n: u64,
    r: u32,
    p: u32,
    salt: Vec<u8>,
    hash: Vec<u8>,
}

impl EncodedHash {
    /// Current-version (`$s2$`) encoding of a derivation result.
    pub fn new(params: &ScryptParams, salt: Vec<u8>, hash: Vec<u8>) -> Self {
        Self {
            version: SCRYPT_LATEST_VERSION,
            n: params.n(),
            r: params.r(),
            p: params.p(),
            salt,
            hash,
        }
    }

    /// Encoding with an explicit layout version.
    ///
    /// # Errors
    ///
    /// - [`ScryptError::UnsupportedVersion`] for versions other than 0, 1, 2
    /// - [`ScryptError::ParameterOverflow`] if a legacy layout cannot hold `n`, `r` or `p`
    pub fn with_version(
        version: u8,
        n: u64,
        r: u32,
        p: u32,
        salt: Vec<u8>,
        hash: Vec<u8>,
    ) -> Result<Self, ScryptError> {
        match version {
            2 => {}
            0 | 1 => {
                if n > LEGACY_N_MAX || r > LEGACY_RP_MAX || p > LEGACY_RP_MAX {
                    return Err(ScryptError::ParameterOverflow);
                }
            }
            v => return Err(ScryptError::UnsupportedVersion(v)),
        }
        Ok(Self {
            version,
            n,
            r,
            p,
            salt,
            hash,
        })
    }

    /// Parse an encoded hash string.
    ///
    /// Parameters are not validated here; [`params`](Self::params) does that.
    ///
    /// # Errors
    ///
    /// - [`ScryptError::EmptyHash`] for a blank string
    /// - [`ScryptError::UnsupportedVersion`] for an unknown `$s<v>$` prefix
    /// - [`ScryptError::Format`] for wrong segment counts or bad numbers
    /// - [`ScryptError::Base64`] for an undecodable salt or hash
    ///
    /// # Example
    ///
    /// ```
    /// use scrypt_hash::header::EncodedHash;
    ///
    /// let h = EncodedHash::parse("$s2$16$1$1$c2FsdA==$AAECAw==")?;
    /// assert_eq!((h.n(), h.r(), h.p()), (16, 1, 1));
    /// assert_eq!(h.salt(), b"salt");
    /// assert_eq!(h.hash(), &[0, 1, 2, 3]);
    /// # Ok::<(), scrypt_hash::ScryptError>(())
    /// ```
    pub fn parse(value: &str) -> Result<Self, ScryptError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ScryptError::EmptyHash);
        }

        let pieces: Vec<&str> = value.split('$').filter(|s| !s.is_empty()).collect();

        let first = pieces
            .first()
            .ok_or_else(|| ScryptError::Format("no segments".into()))?;
        let version: u8 = first
            .strip_prefix('s')
            .ok_or_else(|| ScryptError::Format("missing 's' version prefix".into()))?
            .parse()?;

        match version {
            2 => {
                if pieces.len() != 6 {
                    return Err(ScryptError::Format(format!(
                        "expected 6 segments for version 2, found {}",
                        pieces.len()
                    )));
                }
                Ok(Self {
                    version,
                    n: pieces[1].parse()?,
                    r: pieces[2].parse()?,
                    p: pieces[3].parse()?,
                    salt: BASE64.decode(pieces[4])?,
                    hash: BASE64.decode(pieces[5])?,
                })
            }
            0 | 1 => {
                if pieces.len() != 4 {
                    return Err(ScryptError::Format(format!(
                        "expected 4 segments for version {version}, found {}",
                        pieces.len()
                    )));
                }
                let config = u64::from_str_radix(pieces[1], 16)?;
                Ok(Self {
                    version,
                    n: (config >> 16) & LEGACY_N_MAX,
                    r: ((config >> 8) as u32) & LEGACY_RP_MAX,
                    p: (config as u32) & LEGACY_RP_MAX,
                    salt: BASE64.decode(pieces[2])?,
                    hash: BASE64.decode(pieces[3])?,
                })
            }
            v => Err(ScryptError::UnsupportedVersion(v)),
        }
    }

    /// Layout version (0, 1 or 2).
    pub const fn version(&self) -> u8 {
        self.version
    }

    pub const fn n(&self) -> u64 {
        self.n
    }

    pub const fn r(&self) -> u32 {
        self.r
    }

    pub const fn p(&self) -> u32 {
        self.p
    }

    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    pub fn hash(&self) -> &[u8] {
        &self.hash
    }

    /// Derived-key length, taken from the stored hash.
    pub fn output_len(&self) -> usize {
        self.hash.len()
    }

    /// Validated parameters for re-deriving this hash.
    pub fn params(&self) -> Result<ScryptParams, ScryptError> {
        ScryptParams::new(self.n, self.r, self.p, self.output_len())
    }

    /// The encoded string (same as `to_string()`).
    pub fn to_encoded(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EncodedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let salt = BASE64.encode(&self.salt);
        let hash = BASE64.encode(&self.hash);
        if self.version >= 2 {
            write!(
                f,
                "$s{}${}${}${}${}${}",
                self.version, self.n, self.r, self.p, salt, hash
            )
        } else {
            let config = (self.n << 16) | (u64::from(self.r) << 8) | u64::from(self.p);
            write!(f, "$s{}${:x}${}${}", self.version, config, salt, hash)
        }
    }
}

impl FromStr for EncodedHash {
    type Err = ScryptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
