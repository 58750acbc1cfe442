//! Reason-phrase lookup backed by `http::StatusCode`

use http::StatusCode;

/// Canonical reason phrase for `code`, or `""` when the code is not a valid
/// HTTP status or has no registered phrase.
#[must_use]
pub fn reason_phrase(code: i32) -> &'static str {
    u16::try_from(code)
        .ok()
        .and_then(|c| StatusCode::from_u16(c).ok())
        .and_then(|s| s.canonical_reason())
        .unwrap_or("")
}
