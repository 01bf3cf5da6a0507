//! src/harness/runner.rs
//! Execute harness cases and collect per-case reports

use crate::encoder::{compare, encode, ScryptEncoder};
use crate::error::ScryptError;
use crate::harness::vectors::TestCase;
use crate::kdf::scrypt::compute_derived_hash;
use crate::utils::compare_arrays;

use log::{debug, info};
use std::time::{Duration, Instant};

/// Outcome of one [`TestCase`].
#[derive(Debug, Clone)]
pub struct CaseReport {
    pub name: String,
    pub n: u64,
    pub r: u32,
    pub p: u32,
    pub output_len: usize,
    /// `None` when the library refused the inputs.
    pub derived: Option<Vec<u8>>,
    /// Output of the free [`encode`] function.
    pub encoded: Option<String>,
    /// Output of [`ScryptEncoder::encode`].
    pub encoder_output: Option<String>,
    /// `compare(encoded, password)`, when both encoding and comparison succeeded.
    pub compare_ok: Option<bool>,
    /// First library error seen, if any.
    pub error: Option<String>,
    pub elapsed: Duration,
    pub passed: bool,
}

struct Steps {
    derived: Vec<u8>,
    encoded: String,
    encoder_output: String,
    compare_ok: bool,
}

fn run_steps(case: &TestCase) -> Result<Steps, ScryptError> {
    let derived = compute_derived_hash(
        &case.password,
        &case.salt,
        case.n,
        case.r,
        case.p,
        case.output_len,
    )?;
    let encoded = encode(
        &case.password,
        Some(case.salt.as_slice()),
        case.n,
        case.r,
        case.p,
        case.output_len,
    )?;
    let encoder_output = ScryptEncoder::new(
        case.n,
        case.r,
        case.p,
        case.output_len,
        Some(case.salt.clone()),
    )?
    .encode(&case.password)?;
    let compare_ok = compare(&encoded, &case.password)?;
    Ok(Steps {
        derived,
        encoded,
        encoder_output,
        compare_ok,
    })
}

/// Run one case: derive, encode both ways, compare, then check against
/// `case.expected`.
///
/// Any error along the way means "no output"; a case expecting `None` then
/// passes.
pub fn run_case(case: &TestCase) -> CaseReport {
    debug!(
        "harness: {} (N={}, r={}, p={}, len={})",
        case.name, case.n, case.r, case.p, case.output_len
    );
    let start = Instant::now();
    let outcome = run_steps(case);
    let elapsed = start.elapsed();

    let mut report = CaseReport {
        name: case.name.clone(),
        n: case.n,
        r: case.r,
        p: case.p,
        output_len: case.output_len,
        derived: None,
        encoded: None,
        encoder_output: None,
        compare_ok: None,
        error: None,
        elapsed,
        passed: false,
    };

    match outcome {
        Ok(steps) => {
            report.derived = Some(steps.derived);
            report.encoded = Some(steps.encoded);
            report.encoder_output = Some(steps.encoder_output);
            report.compare_ok = Some(steps.compare_ok);
        }
        Err(e) => {
            debug!("harness: {} refused: {e}", case.name);
            report.error = Some(e.to_string());
        }
    }

    report.passed = compare_arrays(report.derived.as_deref(), case.expected.as_deref());
    report
}

/// Run every case in order on the calling thread.
///
/// Cases marked `slow` are skipped unless `include_slow` is set.
pub fn run_all(cases: &[TestCase], include_slow: bool) -> Vec<CaseReport> {
    let reports: Vec<CaseReport> = cases
        .iter()
        .filter(|c| include_slow || !c.slow)
        .map(run_case)
        .collect();

    let passed = reports.iter().filter(|r| r.passed).count();
    info!(
        "harness: {passed}/{} passed, {} skipped",
        reports.len(),
        cases.len() - reports.len()
    );
    reports
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_inputs_pass_when_expected_none() {
        let case = TestCase::new("n=1000", b"pw", b"salt", 1000, 1, 1, 32, None);
        let report = run_case(&case);
        assert!(report.passed);
        assert!(report.derived.is_none());
        assert!(report.error.is_some());
    }

    #[test]
    fn mismatch_fails() {
        let case = TestCase::new("wrong", b"pw", b"salt", 16, 1, 1, 32, Some(&[0u8; 32][..]));
        let report = run_case(&case);
        assert!(!report.passed);
        assert_eq!(report.compare_ok, Some(true));
        assert_eq!(report.encoded, report.encoder_output);
    }

    #[test]
    fn slow_cases_skipped() {
        let cases = vec![
            TestCase::new("a", b"pw", b"salt", 16, 1, 1, 32, None).slow(),
            TestCase::new("b", b"pw", b"salt", 16, 1, 1, 32, None),
        ];
        let reports = run_all(&cases, false);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].name, "b");
    }
}
