//! tests/common.rs
//! Common constants and utilities shared across test files

use std::path::PathBuf;

/// Small cost for tests - timing of realistic parameters is in benches/
#[allow(dead_code)] // Used across multiple test files
pub const TEST_COST: u64 = 16;

/// Standard test password used across test files
#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &[u8] = b"pw";

#[allow(dead_code)] // Used across multiple test files
pub const TEST_SALT: &[u8] = b"salt";

/// scrypt("pw", "salt", N=16, r=1, p=1, 32)
#[allow(dead_code)] // Used across multiple test files
pub const TEST_HASH_HEX: &str = "086be1ce38ba574b6133f2c1cfafecb7f2406cc739054fb368b2cb0f556daf00";

/// `TEST_HASH_HEX` as a v2 encoded hash
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ENCODED_V2: &str = "$s2$16$1$1$c2FsdA==$CGvhzji6V0thM/LBz6/st/JAbMc5BU+zaLLLD1VtrwA=";

/// The same hash in the legacy `$s1$` layout (config 0x100101)
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ENCODED_V1: &str = "$s1$100101$c2FsdA==$CGvhzji6V0thM/LBz6/st/JAbMc5BU+zaLLLD1VtrwA=";

/// Path of a file under tests/vector/data/
#[allow(dead_code)] // Used across multiple test files
pub fn vector_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("vector")
        .join("data")
        .join(filename)
}
