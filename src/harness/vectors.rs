//! src/harness/vectors.rs
//! Test cases: the built-in RFC 7914 table and JSON vector files

use crate::consts::DEFAULT_OUTPUT_LEN;
use crate::error::ScryptError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// RFC 7914 §12, vector 2.
const RFC_NACL: [u8; 64] = [
    0xfd, 0xba, 0xbe, 0x1c, 0x9d, 0x34, 0x72, 0x00, 0x78, 0x56, 0xe7, 0x19, 0x0d, 0x01, 0xe9, 0xfe,
    0x7c, 0x6a, 0xd7, 0xcb, 0xc8, 0x23, 0x78, 0x30, 0xe7, 0x73, 0x76, 0x63, 0x4b, 0x37, 0x31, 0x62,
    0x2e, 0xaf, 0x30, 0xd9, 0x2e, 0x22, 0xa3, 0x88, 0x6f, 0xf1, 0x09, 0x27, 0x9d, 0x98, 0x30, 0xda,
    0xc7, 0x27, 0xaf, 0xb9, 0x4a, 0x83, 0xee, 0x6d, 0x83, 0x60, 0xcb, 0xdf, 0xa2, 0xcc, 0x06, 0x40,
];

/// RFC 7914 §12, vector 3.
const RFC_SODIUM_CHLORIDE_16K: [u8; 64] = [
    0x70, 0x23, 0xbd, 0xcb, 0x3a, 0xfd, 0x73, 0x48, 0x46, 0x1c, 0x06, 0xcd, 0x81, 0xfd, 0x38, 0xeb,
    0xfd, 0xa8, 0xfb, 0xba, 0x90, 0x4f, 0x8e, 0x3e, 0xa9, 0xb5, 0x43, 0xf6, 0x54, 0x5d, 0xa1, 0xf2,
    0xd5, 0x43, 0x29, 0x55, 0x61, 0x3f, 0x0f, 0xcf, 0x62, 0xd4, 0x97, 0x05, 0x24, 0x2a, 0x9a, 0xf9,
    0xe6, 0x1e, 0x85, 0xdc, 0x0d, 0x65, 0x1e, 0x40, 0xdf, 0xcf, 0x01, 0x7b, 0x45, 0x57, 0x58, 0x87,
];

/// RFC 7914 §12, vector 4 (1 GiB of working memory).
const RFC_SODIUM_CHLORIDE_1M: [u8; 64] = [
    0x21, 0x01, 0xcb, 0x9b, 0x6a, 0x51, 0x1a, 0xae, 0xad, 0xdb, 0xbe, 0x09, 0xcf, 0x70, 0xf8, 0x81,
    0xec, 0x56, 0x8d, 0x57, 0x4a, 0x2f, 0xfd, 0x4d, 0xab, 0xe5, 0xee, 0x98, 0x20, 0xad, 0xaa, 0x47,
    0x8e, 0x56, 0xfd, 0x8f, 0x4b, 0xa5, 0xd0, 0x9f, 0xfa, 0x1c, 0x6d, 0x92, 0x7c, 0x40, 0xf4, 0xc3,
    0x37, 0x30, 0x40, 0x49, 0xe8, 0xa9, 0x52, 0xfb, 0xcb, 0xf4, 0x5c, 0x6f, 0xa7, 0x7a, 0x41, 0xa4,
];

/// One harness case.
///
/// `expected = None` means the library must refuse the inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub password: Vec<u8>,
    pub salt: Vec<u8>,
    pub n: u64,
    pub r: u32,
    pub p: u32,
    pub output_len: usize,
    pub expected: Option<Vec<u8>>,
    /// Needs enough memory/time that it is skipped unless asked for.
    pub slow: bool,
}

impl TestCase {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        password: &[u8],
        salt: &[u8],
        n: u64,
        r: u32,
        p: u32,
        output_len: usize,
        expected: Option<&[u8]>,
    ) -> Self {
        Self {
            name: name.into(),
            password: password.to_vec(),
            salt: salt.to_vec(),
            n,
            r,
            p,
            output_len,
            expected: expected.map(<[u8]>::to_vec),
            slow: false,
        }
    }

    #[must_use]
    pub fn slow(mut self) -> Self {
        self.slow = true;
        self
    }
}

/// On-disk shape of a case: byte fields as hex strings.
///
/// ```json
/// {
///   "name": "rfc7914-2",
///   "password_hex": "70617373776f7264",
///   "salt_hex": "4e61436c",
///   "n": 1024, "r": 8, "p": 16,
///   "output_len": 64,
///   "expected_hex": "fdbabe1c..."
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorRecord {
    pub name: String,
    #[serde(default)]
    pub password_hex: String,
    #[serde(default)]
    pub salt_hex: String,
    pub n: u64,
    pub r: u32,
    pub p: u32,
    #[serde(default = "default_output_len")]
    pub output_len: usize,
    #[serde(default)]
    pub expected_hex: Option<String>,
    #[serde(default)]
    pub slow: bool,
}

const fn default_output_len() -> usize {
    DEFAULT_OUTPUT_LEN
}

fn decode_hex(field: &str, name: &str, value: &str) -> Result<Vec<u8>, ScryptError> {
    hex::decode(value).map_err(|e| ScryptError::Format(format!("{name}: bad {field}: {e}")))
}

impl TryFrom<VectorRecord> for TestCase {
    type Error = ScryptError;

    fn try_from(rec: VectorRecord) -> Result<Self, Self::Error> {
        let password = decode_hex("password_hex", &rec.name, &rec.password_hex)?;
        let salt = decode_hex("salt_hex", &rec.name, &rec.salt_hex)?;
        let expected = rec
            .expected_hex
            .as_deref()
            .map(|h| decode_hex("expected_hex", &rec.name, h))
            .transpose()?;
        Ok(Self {
            name: rec.name,
            password,
            salt,
            n: rec.n,
            r: rec.r,
            p: rec.p,
            output_len: rec.output_len,
            expected,
            slow: rec.slow,
        })
    }
}

impl From<&TestCase> for VectorRecord {
    fn from(case: &TestCase) -> Self {
        Self {
            name: case.name.clone(),
            password_hex: hex::encode(&case.password),
            salt_hex: hex::encode(&case.salt),
            n: case.n,
            r: case.r,
            p: case.p,
            output_len: case.output_len,
            expected_hex: case.expected.as_deref().map(hex::encode),
            slow: case.slow,
        }
    }
}

/// The RFC 7914 §12 table plus parameter-rejection cases.
pub fn builtin_vectors() -> Vec<TestCase> {
    vec![
        // RFC vector 1 uses an empty salt, which is refused here
        TestCase::new("rfc7914-1 (empty salt)", b"", b"", 16, 1, 1, 64, None),
        TestCase::new("rfc7914-2", b"password", b"NaCl", 1024, 8, 16, 64, Some(&RFC_NACL[..])),
        TestCase::new(
            "rfc7914-3",
            b"pleaseletmein",
            b"SodiumChloride",
            16_384,
            8,
            1,
            64,
            Some(&RFC_SODIUM_CHLORIDE_16K[..]),
        ),
        TestCase::new(
            "rfc7914-4",
            b"pleaseletmein",
            b"SodiumChloride",
            1_048_576,
            8,
            1,
            64,
            Some(&RFC_SODIUM_CHLORIDE_1M[..]),
        )
        .slow(),
        TestCase::new("cost not a power of two", b"password", b"NaCl", 1000, 8, 1, 32, None),
        TestCase::new("cost of one", b"password", b"NaCl", 1, 8, 1, 32, None),
        TestCase::new("zero block size", b"password", b"NaCl", 1024, 0, 1, 32, None),
        TestCase::new("zero parallelism", b"password", b"NaCl", 1024, 8, 0, 32, None),
        TestCase::new("output length 48", b"password", b"NaCl", 1024, 8, 1, 48, None),
        TestCase::new("output length 0", b"password", b"NaCl", 1024, 8, 1, 0, None),
    ]
}

/// Read a JSON array of [`VectorRecord`]s.
pub fn load_vectors(path: impl AsRef<Path>) -> Result<Vec<TestCase>, ScryptError> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let records: Vec<VectorRecord> = serde_json::from_str(&content)?;
    records.into_iter().map(TestCase::try_from).collect()
}
