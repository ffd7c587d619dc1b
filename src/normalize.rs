//! URL normalization for comparison and output.
//!
//! Two distinct operations live here: leading-slash correction, which is
//! applied to the literal URLs written to output, and full normalization
//! (slash + lowercase), which is used only when scoring candidates.

/// Ensure a URL starts with `/`. The corrected form, original casing intact,
/// is what appears in output files.
pub fn ensure_leading_slash(url: &str) -> String {
    if url.starts_with('/') {
        url.to_string()
    } else {
        format!("/{url}")
    }
}

/// Normalize a URL for case-insensitive comparison.
/// Idempotent; an empty string normalizes to `/`.
pub fn normalize_url(url: &str) -> String {
    ensure_leading_slash(url).to_lowercase()
}
