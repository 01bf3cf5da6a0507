// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Helpers for reporting derivation results.

/// Sentinel printed for an absent byte sequence.
pub const NULL_SENTINEL: &str = "[NULL]";

/// Lowercase, space-separated hex (`"0a ff 10"`), or `[NULL]` when absent.
pub fn bytes_to_hex(data: Option<&[u8]>) -> String {
    let Some(data) = data else {
        return NULL_SENTINEL.to_string();
    };
    data.iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Equality for test expectations: `true` iff both are absent, or both render
/// to the same hex string.
///
/// This is **not** constant-time. Never use it on secrets; see
/// [`safe_equals`](crate::crypto::compare::safe_equals) for that.
pub fn compare_arrays(a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(_), None) | (None, Some(_)) => false,
        (Some(_), Some(_)) => bytes_to_hex(a) == bytes_to_hex(b),
    }
}
