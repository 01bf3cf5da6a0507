//! Main entry point for the scrypt-tester CLI

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still wins; -v / -q only move the default
    let default_filter = match (cli.verbose, cli.quiet) {
        (0, true) => "error",
        (0, false) => "warn",
        (1, _) => "info",
        (2, _) => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Vectors(args) => commands::vectors::execute(args),
        Commands::Hash(args) => commands::hash::execute(args),
        Commands::Verify(args) => commands::verify::execute(args),
        Commands::Derive(args) => commands::derive::execute(args),
    }
}
