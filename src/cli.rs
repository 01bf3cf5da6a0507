//! Root CLI structure for scrypt-tester

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "scrypt-tester")]
#[command(about = "scrypt key derivation, password hashes and RFC 7914 test vectors", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the test-vector harness
    Vectors(crate::commands::vectors::VectorsArgs),

    /// Hash a password into a `$s2$...` string
    Hash(crate::commands::hash::HashArgs),

    /// Check a password against an encoded hash
    Verify(crate::commands::verify::VerifyArgs),

    /// Derive a raw key and print it as hex
    Derive(crate::commands::derive::DeriveArgs),
}
