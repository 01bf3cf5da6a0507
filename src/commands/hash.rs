//! `hash`: produce an encoded password hash

use anyhow::{Context, Result};
use clap::Args;
use scrypt_hash::aliases::PasswordBytes;
use scrypt_hash::ScryptEncoder;

use super::salt_bytes;

#[derive(Args)]
pub struct HashArgs {
    /// Password to hash
    #[arg(short = 'P', long, env = "SCRYPT_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Salt as UTF-8 (random 32 bytes if neither salt option is given)
    #[arg(long, conflicts_with = "salt_hex")]
    pub salt: Option<String>,

    /// Salt as hex
    #[arg(long)]
    pub salt_hex: Option<String>,

    /// CPU/memory cost (power of two)
    #[arg(short = 'N', long = "cost")]
    pub n: Option<u64>,

    /// Block size
    #[arg(short, long = "block-size")]
    pub r: Option<u32>,

    /// Parallelism
    #[arg(short, long = "parallelism")]
    pub p: Option<u32>,

    /// Derived key length in bytes (multiple of 32)
    #[arg(short, long)]
    pub length: Option<usize>,
}

pub fn execute(args: HashArgs) -> Result<()> {
    let defaults = *ScryptEncoder::default().params();
    let salt = salt_bytes(args.salt.as_deref(), args.salt_hex.as_deref())?;

    let encoder = ScryptEncoder::new(
        args.n.unwrap_or(defaults.n()),
        args.r.unwrap_or(defaults.r()),
        args.p.unwrap_or(defaults.p()),
        args.length.unwrap_or(defaults.output_len()),
        salt,
    )
    .context("invalid scrypt parameters")?;

    let password = PasswordBytes::new(args.password.into_bytes());
    let encoded = encoder
        .encode_secret(&password)
        .context("hashing failed")?;

    println!("{encoded}");
    Ok(())
}
