//! tests/kdf_tests.rs
//! scrypt and PBKDF2 against published vectors and the RustCrypto `scrypt` crate

mod common;

use common::{TEST_COST, TEST_HASH_HEX, TEST_PASSWORD, TEST_SALT};
use scrypt_hash::{
    compute_derived_hash, compute_derived_hash_default, derive_with_params,
    derive_with_params_sequential, pbkdf2_hmac_sha1, pbkdf2_hmac_sha256, pbkdf2_hmac_sha512,
    ScryptError, ScryptParams,
};

fn reference(password: &[u8], salt: &[u8], log_n: u8, r: u32, p: u32, len: usize) -> Vec<u8> {
    let params = scrypt::Params::new(log_n, r, p).unwrap();
    let mut out = vec![0u8; len];
    scrypt::scrypt(password, salt, &params, &mut out).unwrap();
    out
}

#[test]
fn rfc7914_vector_2() {
    let dk = compute_derived_hash(b"password", b"NaCl", 1024, 8, 16, 64).unwrap();
    assert_eq!(
        hex::encode(dk),
        "fdbabe1c9d3472007856e7190d01e9fe7c6ad7cbc8237830e77376634b373162\
         2eaf30d92e22a3886ff109279d9830dac727afb94a83ee6d8360cbdfa2cc0640"
    );
}

#[test]
fn rfc7914_vector_3() {
    let dk = compute_derived_hash(b"pleaseletmein", b"SodiumChloride", 16_384, 8, 1, 64).unwrap();
    assert_eq!(
        hex::encode(dk),
        "7023bdcb3afd7348461c06cd81fd38ebfda8fbba904f8e3ea9b543f6545da1f2\
         d5432955613f0fcf62d49705242a9af9e61e85dc0d651e40dfcf017b45575887"
    );
}

#[test]
fn rfc7914_vector_1_is_rejected_for_empty_salt() {
    assert!(matches!(
        compute_derived_hash(b"", b"", 16, 1, 1, 64),
        Err(ScryptError::InvalidSalt)
    ));
}

#[test]
fn default_output_length() {
    let dk = compute_derived_hash_default(TEST_PASSWORD, TEST_SALT, TEST_COST, 1, 1).unwrap();
    assert_eq!(hex::encode(dk), TEST_HASH_HEX);
}

#[test]
fn matches_rustcrypto_scrypt() {
    let cases: &[(&[u8], &[u8], u8, u32, u32, usize)] = &[
        (b"password", b"NaCl", 4, 1, 1, 32),
        (b"", b"x", 4, 1, 1, 32),
        (b"correct horse battery staple", b"pepper", 6, 2, 3, 64),
        (b"\x00\xff\x10", &[0u8; 32], 8, 4, 2, 96),
        (b"long", b"salt", 10, 8, 4, 128),
    ];
    for &(pw, salt, log_n, r, p, len) in cases {
        let ours = compute_derived_hash(pw, salt, 1u64 << log_n, r, p, len).unwrap();
        assert_eq!(
            ours,
            reference(pw, salt, log_n, r, p, len),
            "N=2^{log_n} r={r} p={p} len={len}"
        );
    }
}

#[test]
fn sequential_and_parallel_lanes_agree() {
    let params = ScryptParams::new(64, 2, 7, 64).unwrap();
    let a = derive_with_params(b"lanes", b"salt", &params).unwrap();
    let b = derive_with_params_sequential(b"lanes", b"salt", &params).unwrap();
    assert_eq!(a, b);
}

#[test]
fn each_parameter_changes_output() {
    let base = compute_derived_hash(b"pw", b"salt", 32, 2, 2, 32).unwrap();
    let variants = [
        compute_derived_hash(b"pX", b"salt", 32, 2, 2, 32).unwrap(),
        compute_derived_hash(b"pw", b"salX", 32, 2, 2, 32).unwrap(),
        compute_derived_hash(b"pw", b"salt", 64, 2, 2, 32).unwrap(),
        compute_derived_hash(b"pw", b"salt", 32, 3, 2, 32).unwrap(),
        compute_derived_hash(b"pw", b"salt", 32, 2, 3, 32).unwrap(),
    ];
    for v in &variants {
        assert_ne!(&base, v);
    }
}

#[test]
fn parameter_boundaries() {
    let bad = [
        (0u64, 1u32, 1u32, 32usize),
        (1, 1, 1, 32),
        (3, 1, 1, 32),
        (1000, 1, 1, 32),
        (16, 0, 1, 32),
        (16, 1, 0, 32),
        (16, 1, 1, 0),
        (16, 1, 1, 31),
        (16, 1, 1, 48),
    ];
    for (n, r, p, len) in bad {
        assert!(
            compute_derived_hash(b"pw", b"salt", n, r, p, len).is_err(),
            "N={n} r={r} p={p} len={len} should be rejected"
        );
    }
    assert!(matches!(
        compute_derived_hash(b"pw", b"salt", 1 << 20, 1 << 20, 1 << 11, 32),
        Err(ScryptError::ParametersTooLarge)
    ));
    assert!(compute_derived_hash(b"pw", b"salt", 2, 1, 1, 32).is_ok());
}

#[test]
fn pbkdf2_sha1_rfc6070() {
    assert_eq!(
        hex::encode(pbkdf2_hmac_sha1(b"password", b"salt", 1, 20).unwrap()),
        "0c60c80f961f0e71f3a9b524af6012062fe037a6"
    );
    assert_eq!(
        hex::encode(pbkdf2_hmac_sha1(b"password", b"salt", 4096, 20).unwrap()),
        "4b007901b765489abead49d926f721d065a429c1"
    );
}

#[test]
fn pbkdf2_sha256_rfc7914() {
    assert_eq!(
        hex::encode(pbkdf2_hmac_sha256(b"passwd", b"salt", 1, 64).unwrap()),
        "55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc\
         49ca9cccf179b645991664b39d77ef317c71b845b1e30bd509112041d3a19783"
    );
    assert_eq!(
        hex::encode(pbkdf2_hmac_sha256(b"Password", b"NaCl", 80_000, 64).unwrap()),
        "4ddcd8f60b98be21830cee5ef22701f9641a4418d04c0414aeff08876b34ab56\
         a1d425a1225833549adb841b51c9b3176a272bdebba1d078478f62b397f33c8d"
    );
}

#[test]
fn pbkdf2_sha512_known_value() {
    assert_eq!(
        hex::encode(pbkdf2_hmac_sha512(b"password", b"salt", 1, 64).unwrap()),
        "867f70cf1ade02cff3752599a3a53dc4af34c7a669815ae5d513554e1c8cf252\
         c02d470a285a0501bad999bfe943c08f050235d7d68b1da55e63f73b60a57fce"
    );
}

#[test]
fn pbkdf2_rejects_zero_iterations_and_length() {
    assert!(matches!(
        pbkdf2_hmac_sha256(b"pw", b"salt", 0, 32),
        Err(ScryptError::Pbkdf2(_))
    ));
    assert!(matches!(
        pbkdf2_hmac_sha1(b"pw", b"salt", 1, 0),
        Err(ScryptError::Pbkdf2(_))
    ));
}
