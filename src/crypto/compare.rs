//! Constant-time equality for derived keys.

use subtle::ConstantTimeEq;

/// Returns `true` if `a` and `b` are byte-for-byte equal.
///
/// Runs in time independent of the contents for equal-length inputs. A length
/// mismatch returns `false` immediately; lengths are not secret here (the
/// expected length is stored in the encoded hash).
#[inline]
pub fn safe_equals(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
