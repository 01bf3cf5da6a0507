//! `verify`: check a password against an encoded hash

use anyhow::{bail, Context, Result};
use clap::Args;
use console::style;
use scrypt_hash::compare_str;

#[derive(Args)]
pub struct VerifyArgs {
    /// Encoded hash (`$s2$...`, `$s1$...` or `$s0$...`)
    #[arg(long)]
    pub hash: String,

    /// Password to check
    #[arg(short = 'P', long, env = "SCRYPT_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    let matched = compare_str(&args.hash, &args.password).context("cannot verify hash")?;
    if matched {
        println!("{}", style("match").green());
        Ok(())
    } else {
        println!("{}", style("no match").red());
        bail!("password does not match");
    }
}
