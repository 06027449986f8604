//! Postcode normalization.
//!
//! Applied identically to query input and to every stored pattern, so that
//! comparison ignores ASCII case and space characters.

/// Remove space characters (`' '`) and lowercase ASCII letters.
///
/// Other whitespace (tabs, non-breaking spaces) and non-ASCII characters are
/// kept as-is. No format validation is performed. Normalizing an
/// already-normalized string returns it unchanged.
pub fn normalize(raw: &str) -> String {
    raw.replace(' ', "").to_ascii_lowercase()
}
