//! Text helpers for TXT record values.

/// Replace each tab, carriage return and line feed with a single space, then
/// trim surrounding whitespace.
#[must_use]
pub fn sanitize_text(value: &str) -> String {
    value
        .replace(['\t', '\r', '\n'], " ")
        .trim()
        .to_string()
}
