//! src/crypto/salsa.rs
//! Salsa20/8 core (RFC 7914 §3)

use crate::consts::SALSA_BLOCK_WORDS;

macro_rules! quarter {
    ($x:ident, $a:expr, $b:expr, $c:expr, $d:expr) => {
        $x[$b] ^= $x[$a].wrapping_add($x[$d]).rotate_left(7);
        $x[$c] ^= $x[$b].wrapping_add($x[$a]).rotate_left(9);
        $x[$d] ^= $x[$c].wrapping_add($x[$b]).rotate_left(13);
        $x[$a] ^= $x[$d].wrapping_add($x[$c]).rotate_left(18);
    };
}

/// Apply the Salsa20/8 core to a 64-byte block held as little-endian words.
///
/// Four double-rounds (column round then row round), followed by word-wise
/// addition of the original input.
#[inline(always)]
pub fn salsa20_8(block: &mut [u32; SALSA_BLOCK_WORDS]) {
    let mut x = *block;

    for _ in 0..4 {
        // columns
        quarter!(x, 0, 4, 8, 12);
        quarter!(x, 5, 9, 13, 1);
        quarter!(x, 10, 14, 2, 6);
        quarter!(x, 15, 3, 7, 11);
        // rows
        quarter!(x, 0, 1, 2, 3);
        quarter!(x, 5, 6, 7, 4);
        quarter!(x, 10, 11, 8, 9);
        quarter!(x, 15, 12, 13, 14);
    }

    for (out, mixed) in block.iter_mut().zip(x.iter()) {
        *out = out.wrapping_add(*mixed);
    }
}
