// src/crypto/mod.rs

//! Low-level primitives behind the KDF.
//!
//! - [`salsa`]: the Salsa20/8 core
//! - [`mix`]: scryptBlockMix / scryptROMix
//! - [`compare`]: constant-time equality
//! - [`rng`]: salt generation
//!
//! HMAC types are defined in `aliases.rs`.

pub mod compare;
pub mod mix;
pub mod rng;
pub mod salsa;
