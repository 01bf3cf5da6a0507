// src/lib.rs

pub mod aliases;
pub mod consts;
pub mod crypto;
pub mod encoder;
pub mod error;
pub mod harness;
pub mod header;
pub mod kdf;
pub mod params;
pub mod utils;

// Password hashing: what most callers need
pub use encoder::{compare, compare_str, encode, encode_str, ScryptEncoder};
pub use error::ScryptError;
pub use header::EncodedHash;
pub use params::ScryptParams;

// Raw key derivation
pub use kdf::pbkdf2::{pbkdf2_hmac_sha1, pbkdf2_hmac_sha256, pbkdf2_hmac_sha512};
pub use kdf::scrypt::{
    compute_derived_hash, compute_derived_hash_default, derive_with_params,
    derive_with_params_sequential,
};

pub use utils::{bytes_to_hex, compare_arrays};
