//! # Constants
//!
//! Encoding versions, default lengths and parameter limits.

/// The encoded-hash version produced by this library (`$s2$...`).
pub const SCRYPT_LATEST_VERSION: u8 = 2;

/// Default derived-key length in bytes.
pub const DEFAULT_OUTPUT_LEN: usize = 32;

/// Derived-key lengths must be a multiple of this.
pub const OUTPUT_LEN_MULTIPLE: usize = 32;

/// Length of a salt generated when the caller does not supply one.
pub const DEFAULT_SALT_LEN: usize = 32;

/// Default CPU/memory cost for [`ScryptEncoder`](crate::ScryptEncoder).
pub const DEFAULT_COST: u64 = 16_384;

/// Default block size for [`ScryptEncoder`](crate::ScryptEncoder).
pub const DEFAULT_BLOCK_SIZE: u32 = 8;

/// Default parallelism for [`ScryptEncoder`](crate::ScryptEncoder).
pub const DEFAULT_PARALLELISM: u32 = 1;

/// Upper bound for `r * p` (RFC 7914: `p <= (2^32 - 1) * hLen / MFLen`, rounded down to 2^30).
pub const MAX_RP: u64 = 1 << 30;

/// Buffer sizes are addressed with 32-bit signed offsets.
pub const MAX_BUFFER_BYTES: u64 = i32::MAX as u64;

/// Largest `N` the legacy (`$s0$`/`$s1$`) config can hold (16-bit field).
pub const LEGACY_N_MAX: u64 = 0xffff;

/// Largest `r` / `p` the legacy config can hold (8-bit fields).
pub const LEGACY_RP_MAX: u32 = 0xff;

/// 32-bit words in one Salsa20/8 block.
pub const SALSA_BLOCK_WORDS: usize = 16;
