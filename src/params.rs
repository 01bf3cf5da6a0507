//! scrypt cost parameters and their validation.

use crate::consts::{
    DEFAULT_BLOCK_SIZE, DEFAULT_COST, DEFAULT_OUTPUT_LEN, DEFAULT_PARALLELISM, MAX_BUFFER_BYTES,
    MAX_RP, OUTPUT_LEN_MULTIPLE,
};
use crate::error::ScryptError;

/// Validated scrypt parameters.
///
/// Holding a `ScryptParams` means every bound has already been checked, so the
/// derivation core can size its buffers without further validation.
///
/// # Thread Safety
///
/// `ScryptParams` is `Copy`, `Send` and `Sync`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScryptParams {
    n: u64,
    r: u32,
    p: u32,
    output_len: usize,
}

impl ScryptParams {
    /// Validate and build a parameter set.
    ///
    /// # Errors
    ///
    /// - [`ScryptError::InvalidCost`] if `n` is not a power of two or is below 2
    /// - [`ScryptError::InvalidBlockSize`] / [`ScryptError::InvalidParallelism`] for zero `r` / `p`
    /// - [`ScryptError::ParametersTooLarge`] if `r * p > 2^30` or any working buffer
    ///   would exceed `i32::MAX` bytes
    /// - [`ScryptError::InvalidOutputLength`] if `output_len` is 0 or not a multiple of 32
    ///
    /// # Example
    ///
    /// ```
    /// use scrypt_hash::ScryptParams;
    ///
    /// let params = ScryptParams::new(1024, 8, 16, 64)?;
    /// assert_eq!(params.log_n(), 10);
    /// assert!(ScryptParams::new(1000, 8, 1, 32).is_err());
    /// # Ok::<(), scrypt_hash::ScryptError>(())
    /// ```
    pub fn new(n: u64, r: u32, p: u32, output_len: usize) -> Result<Self, ScryptError> {
        if n < 2 || !n.is_power_of_two() {
            return Err(ScryptError::InvalidCost(n));
        }
        if r == 0 {
            return Err(ScryptError::InvalidBlockSize);
        }
        if p == 0 {
            return Err(ScryptError::InvalidParallelism);
        }

        let (r64, p64) = (u64::from(r), u64::from(p));
        if r64 * p64 > MAX_RP
            || r64 > MAX_BUFFER_BYTES / 128 / p64
            || r64 > MAX_BUFFER_BYTES / 256
            || n > MAX_BUFFER_BYTES / 128 / r64
        {
            return Err(ScryptError::ParametersTooLarge);
        }

        if output_len == 0 || output_len % OUTPUT_LEN_MULTIPLE != 0 {
            return Err(ScryptError::InvalidOutputLength(output_len));
        }

        Ok(Self {
            n,
            r,
            p,
            output_len,
        })
    }

    /// CPU/memory cost `N`.
    #[must_use]
    pub const fn n(&self) -> u64 {
        self.n
    }

    /// `log2(N)`.
    #[must_use]
    pub const fn log_n(&self) -> u8 {
        self.n.trailing_zeros() as u8
    }

    /// Block size `r`.
    #[must_use]
    pub const fn r(&self) -> u32 {
        self.r
    }

    /// Parallelism `p`.
    #[must_use]
    pub const fn p(&self) -> u32 {
        self.p
    }

    /// Derived-key length in bytes.
    #[must_use]
    pub const fn output_len(&self) -> usize {
        self.output_len
    }

    /// Same cost parameters with a different output length.
    pub fn with_output_len(self, output_len: usize) -> Result<Self, ScryptError> {
        Self::new(self.n, self.r, self.p, output_len)
    }

    /// Bytes in one lane block (`128 * r`).
    #[must_use]
    pub(crate) const fn block_bytes(&self) -> usize {
        128 * self.r as usize
    }

    /// Approximate working memory of one derivation: `128 * r * (N + p + 2)`.
    ///
    /// With the `parallel` feature each concurrently running lane holds its own
    /// `V` table, so the peak is higher.
    #[must_use]
    pub fn memory_bytes(&self) -> u64 {
        128 * u64::from(self.r) * (self.n + u64::from(self.p) + 2)
    }
}

/// Interactive-login strength: N = 16384, r = 8, p = 1, 32-byte output.
impl Default for ScryptParams {
    fn default() -> Self {
        Self {
            n: DEFAULT_COST,
            r: DEFAULT_BLOCK_SIZE,
            p: DEFAULT_PARALLELISM,
            output_len: DEFAULT_OUTPUT_LEN,
        }
    }
}
