//! # Key Derivation Functions (KDF)
//!
//! ## Modules
//!
//! - [`scrypt`] - RFC 7914 scrypt (memory-hard, built on PBKDF2-HMAC-SHA256)
//! - [`pbkdf2`] - PBKDF2-HMAC with SHA-1, SHA-256 and SHA-512
//!
//! ## Usage
//!
//! For password storage use the [`encode`](crate::encode) / [`compare`](crate::compare)
//! functions or [`ScryptEncoder`](crate::ScryptEncoder), which bundle the parameters
//! and salt with the derived hash.
//!
//! These lower-level functions are for callers that need raw key material.

pub mod pbkdf2;
pub mod scrypt;
