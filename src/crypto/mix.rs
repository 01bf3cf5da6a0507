//! src/crypto/mix.rs
//! scryptBlockMix and scryptROMix (RFC 7914 §4, §5)
//!
//! Lane blocks are held as little-endian `u32` words: `32 * r` words per
//! 128·r-byte block. Conversion from and to bytes happens once per lane in
//! [`crate::kdf::scrypt`].

use super::salsa::salsa20_8;
use crate::consts::SALSA_BLOCK_WORDS;
use zeroize::Zeroize;

/// Words in one 128·r-byte lane block.
#[inline(always)]
pub const fn block_words(r: usize) -> usize {
    32 * r
}

/// scryptBlockMix: mixes `input` (2·r Salsa blocks) into `output`.
///
/// The output is written shuffled, `Y0, Y2, …, Y(2r-2), Y1, Y3, …, Y(2r-1)`,
/// so `input` and `output` must be distinct buffers.
///
/// # Panics (by contract)
///
/// Panics if either slice is shorter than `32 * r` words. Callers size both
/// from validated [`ScryptParams`](crate::ScryptParams).
#[inline(always)]
pub fn block_mix(
    input: &[u32],
    output: &mut [u32],
    r: usize,
    scratch: &mut [u32; SALSA_BLOCK_WORDS],
) {
    let last = (2 * r - 1) * SALSA_BLOCK_WORDS;
    scratch.copy_from_slice(&input[last..last + SALSA_BLOCK_WORDS]);

    for (i, chunk) in input[..block_words(r)]
        .chunks_exact(SALSA_BLOCK_WORDS)
        .enumerate()
    {
        for (x, b) in scratch.iter_mut().zip(chunk) {
            *x ^= *b;
        }
        salsa20_8(scratch);

        // even sub-blocks fill the front half, odd ones the back half
        let dst = (i / 2 + (i % 2) * r) * SALSA_BLOCK_WORDS;
        output[dst..dst + SALSA_BLOCK_WORDS].copy_from_slice(scratch);
    }
}

/// Integerify: the first 64-bit little-endian word of the last 64-byte sub-block.
#[inline(always)]
pub fn integerify(block: &[u32], r: usize) -> u64 {
    let j = (2 * r - 1) * SALSA_BLOCK_WORDS;
    u64::from(block[j]) | (u64::from(block[j + 1]) << 32)
}

/// scryptROMix on a single lane, in place.
///
/// - `x`: the lane block (`32 * r` words), overwritten with the result
/// - `v`: scratch table of `n` blocks (`32 * r * n` words)
/// - `t`: one-block scratch
///
/// `n` must be a power of two ≥ 2 (guaranteed by [`ScryptParams`](crate::ScryptParams)).
pub fn ro_mix(x: &mut [u32], n: u64, r: usize, v: &mut [u32], t: &mut [u32]) {
    let words = block_words(r);
    let n_blocks = n as usize;
    let mut scratch = [0u32; SALSA_BLOCK_WORDS];

    // sequential-memory fill: V[i] = X; X = BlockMix(X)
    // two steps per pass so the X/T buffers alternate as input and output
    for i in (0..n_blocks).step_by(2) {
        v[i * words..(i + 1) * words].copy_from_slice(x);
        block_mix(x, t, r, &mut scratch);
        v[(i + 1) * words..(i + 2) * words].copy_from_slice(t);
        block_mix(t, x, r, &mut scratch);
    }

    // data-dependent reads: X = BlockMix(X xor V[j])
    for _ in 0..n_blocks {
        let j = (integerify(x, r) & (n - 1)) as usize;
        let vj = &v[j * words..(j + 1) * words];
        for ((tw, xw), vw) in t.iter_mut().zip(x.iter()).zip(vj) {
            *tw = *xw ^ *vw;
        }
        block_mix(t, x, r, &mut scratch);
    }

    scratch.zeroize();
}
