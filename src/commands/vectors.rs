//! `vectors`: run the scrypt test-vector harness

use anyhow::{bail, Context, Result};
use clap::Args;
use console::style;
use scrypt_hash::harness::{builtin_vectors, load_vectors, run_all, CaseReport};
use scrypt_hash::utils::{bytes_to_hex, NULL_SENTINEL};
use std::path::PathBuf;

#[derive(Args)]
pub struct VectorsArgs {
    /// JSON vector file to run instead of the built-in RFC 7914 table
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Also run cases marked slow (RFC 7914 vector 4 needs 1 GiB)
    #[arg(long)]
    pub include_slow: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

pub fn execute(args: VectorsArgs) -> Result<()> {
    if args.no_color {
        console::set_colors_enabled(false);
    }

    let cases = match &args.file {
        Some(path) => load_vectors(path)
            .with_context(|| format!("Failed to load vectors from {}", path.display()))?,
        None => builtin_vectors(),
    };

    println!("{}", style("scrypt test vectors").bold().cyan());
    println!("{}", style("===================").cyan());

    let reports = run_all(&cases, args.include_slow);
    for report in &reports {
        print_report(report);
    }

    let passed = reports.iter().filter(|r| r.passed).count();
    let failed = reports.len() - passed;
    let skipped = cases.len() - reports.len();

    println!();
    println!(
        "{}: {} passed, {} failed, {} skipped",
        style("Summary").bold(),
        style(passed).green(),
        if failed > 0 {
            style(failed).red()
        } else {
            style(failed).dim()
        },
        skipped
    );

    if failed > 0 {
        bail!("{failed} vector(s) failed");
    }
    Ok(())
}

fn print_report(report: &CaseReport) {
    let verdict = if report.passed {
        style("PASS").green().bold()
    } else {
        style("FAIL").red().bold()
    };

    println!();
    println!("{} {}", verdict, style(&report.name).bold());
    println!(
        "  {}: N={} r={} p={} len={}",
        style("Params").bold(),
        report.n,
        report.r,
        report.p,
        report.output_len
    );
    println!(
        "  {}: {}",
        style("encode").bold(),
        report.encoded.as_deref().unwrap_or(NULL_SENTINEL)
    );
    println!(
        "  {}: {}",
        style("ScryptEncoder").bold(),
        report.encoder_output.as_deref().unwrap_or(NULL_SENTINEL)
    );
    println!(
        "  {}: {}",
        style("compare").bold(),
        report
            .compare_ok
            .map_or_else(|| NULL_SENTINEL.to_string(), |ok| ok.to_string())
    );
    println!(
        "  {}: {}",
        style("Result").bold(),
        bytes_to_hex(report.derived.as_deref())
    );
    if let Some(err) = &report.error {
        println!("  {}: {}", style("Error").bold(), style(err).yellow());
    }
    println!(
        "  {}: {:.3} ms",
        style("Elapsed").bold(),
        report.elapsed.as_secs_f64() * 1000.0
    );
}
