//! Command implementations

pub mod derive;
pub mod hash;
pub mod vectors;
pub mod verify;

use anyhow::{Context, Result};

/// Salt from either `--salt` (UTF-8) or `--salt-hex`.
pub(crate) fn salt_bytes(salt: Option<&str>, salt_hex: Option<&str>) -> Result<Option<Vec<u8>>> {
    match (salt, salt_hex) {
        (_, Some(h)) => hex::decode(h)
            .map(Some)
            .context("--salt-hex is not valid hex"),
        (Some(s), None) => Ok(Some(s.as_bytes().to_vec())),
        (None, None) => Ok(None),
    }
}
