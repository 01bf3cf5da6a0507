//! `derive`: raw scrypt output as hex

use anyhow::{Context, Result};
use clap::Args;
use scrypt_hash::{bytes_to_hex, compute_derived_hash, ScryptParams};
use zeroize::Zeroizing;

use super::salt_bytes;

#[derive(Args)]
pub struct DeriveArgs {
    /// Password (may be empty)
    #[arg(short = 'P', long, env = "SCRYPT_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Salt as UTF-8
    #[arg(long, required_unless_present = "salt_hex", conflicts_with = "salt_hex")]
    pub salt: Option<String>,

    /// Salt as hex
    #[arg(long)]
    pub salt_hex: Option<String>,

    /// CPU/memory cost (power of two)
    #[arg(short = 'N', long = "cost", default_value_t = ScryptParams::default().n())]
    pub n: u64,

    /// Block size
    #[arg(short, long = "block-size", default_value_t = ScryptParams::default().r())]
    pub r: u32,

    /// Parallelism
    #[arg(short, long = "parallelism", default_value_t = ScryptParams::default().p())]
    pub p: u32,

    /// Derived key length in bytes (multiple of 32)
    #[arg(short, long, default_value_t = ScryptParams::default().output_len())]
    pub length: usize,
}

pub fn execute(args: DeriveArgs) -> Result<()> {
    let salt = salt_bytes(args.salt.as_deref(), args.salt_hex.as_deref())?.unwrap_or_default();
    let password = Zeroizing::new(args.password.into_bytes());

    let derived = Zeroizing::new(
        compute_derived_hash(&password, &salt, args.n, args.r, args.p, args.length)
            .context("derivation failed")?,
    );

    println!("{}", bytes_to_hex(Some(derived.as_slice())));
    Ok(())
}
