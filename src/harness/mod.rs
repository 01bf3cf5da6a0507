//! src/harness/mod.rs
//! Test-vector harness
//!
//! Runs derivation, both encoders and `compare` over a table of cases and
//! reports PASS/FAIL against the expected output. Library errors are never
//! propagated out of a case: they become "no output", which is itself a
//! valid expectation (`expected = None`).

pub mod runner;
pub mod vectors;

pub use runner::{run_all, run_case, CaseReport};
pub use vectors::{builtin_vectors, load_vectors, TestCase, VectorRecord};
