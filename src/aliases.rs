//! # Type Aliases
//!
//! HMAC primitives and [`secure-gate`](https://github.com/Slurp9187/secure-gate)
//! wrappers for secret material.
//!
//! ### HMAC Primitives
//! - [`HmacSha1`], [`HmacSha256`], [`HmacSha512`] - PRFs for PBKDF2
//!
//! ### Secrets
//! - [`PasswordBytes`] - heap password buffer, zeroized on drop
//! - [`Salt32`] - 32-byte generated salt
//!
//! All secure types require explicit `.expose_secret()` to read the data.

use hmac::Hmac;
use secure_gate::{Dynamic, Fixed};
use sha1::Sha1;
use sha2::{Sha256, Sha512};

pub type HmacSha1 = Hmac<Sha1>;
pub type HmacSha256 = Hmac<Sha256>;
pub type HmacSha512 = Hmac<Sha512>;

pub type PasswordBytes = Dynamic<Vec<u8>>;
pub type Salt32 = Fixed<[u8; 32]>;
