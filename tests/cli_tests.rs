#![cfg(feature = "cli")]
#![allow(deprecated)] // cargo_bin is deprecated but still supported by assert_cmd
//! tests/cli_tests.rs
//! End-to-end tests for the scrypt-tester binary

mod common;

use assert_cmd::Command;
use common::{vector_path, TEST_ENCODED_V1, TEST_ENCODED_V2};
use predicates::prelude::*;
use tempfile::tempdir;

fn tester() -> Command {
    let mut cmd = Command::cargo_bin("scrypt-tester").expect("scrypt-tester binary");
    cmd.env_remove("SCRYPT_PASSWORD").env_remove("RUST_LOG");
    cmd
}

#[test]
fn vectors_builtin_pass() {
    tester()
        .args(["vectors", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS rfc7914-2"))
        .stdout(predicate::str::contains("Result: [NULL]"))
        .stdout(predicate::str::contains("0 failed, 1 skipped"));
}

#[test]
fn vectors_from_file() {
    tester()
        .args(["vectors", "--no-color", "--file"])
        .arg(vector_path("rfc7914.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS small cost, short password"))
        .stdout(predicate::str::contains(
            "encode: $s2$16$1$1$c2FsdA==$CGvhzji6V0thM/LBz6/st/JAbMc5BU+zaLLLD1VtrwA=",
        ));
}

#[test]
fn vectors_failure_sets_exit_code() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("wrong.json");
    std::fs::write(
        &path,
        r#"[{"name":"wrong","password_hex":"7077","salt_hex":"73616c74","n":16,"r":1,"p":1,
            "expected_hex":"0000000000000000000000000000000000000000000000000000000000000000"}]"#,
    )
    .unwrap();

    tester()
        .args(["vectors", "--no-color", "--file"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL wrong"))
        .stdout(predicate::str::contains("Result: 08 6b e1 ce"))
        .stdout(predicate::str::contains("1 failed"));
}

#[test]
fn vectors_missing_file() {
    tester()
        .args(["vectors", "--file", "/nonexistent/vectors.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load vectors"));
}

#[test]
fn hash_with_fixed_salt() {
    tester()
        .args(["hash", "--password", "pw", "--salt", "salt", "-N", "16", "-r", "1", "-p", "1"])
        .assert()
        .success()
        .stdout(format!("{TEST_ENCODED_V2}\n"));
}

#[test]
fn hash_reads_password_from_env() {
    tester()
        .env("SCRYPT_PASSWORD", "pw")
        .args(["hash", "--salt-hex", "73616c74", "-N", "16", "-r", "1", "-p", "1"])
        .assert()
        .success()
        .stdout(format!("{TEST_ENCODED_V2}\n"));
}

#[test]
fn hash_rejects_bad_cost() {
    tester()
        .args(["hash", "--password", "pw", "-N", "1000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("power of 2"));
}

#[test]
fn verify_match_and_mismatch() {
    tester()
        .args(["verify", "--hash", TEST_ENCODED_V1, "--password", "pw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("match"));

    tester()
        .args(["verify", "--hash", TEST_ENCODED_V2, "--password", "nope"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("no match"));
}

#[test]
fn derive_prints_spaced_hex() {
    tester()
        .args(["derive", "--password", "pw", "--salt", "salt", "-N", "16", "-r", "1", "-p", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("08 6b e1 ce"));
}

#[test]
fn derive_requires_salt() {
    tester()
        .args(["derive", "--password", "pw"])
        .assert()
        .failure();
}
