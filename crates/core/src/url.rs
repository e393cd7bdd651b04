//! Web address normalization for user-supplied URL fields.

use validator::ValidateUrl;

/// Canonicalize a user-supplied web address.
///
/// Blank or absent input yields `None`. Otherwise the value is trimmed and
/// `https://` is prepended unless it already starts with `http://` or
/// `https://`. Applying it twice gives the same result as applying it once.
pub fn normalize_url(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{trimmed}"))
    }
}

/// Whether an already-normalized address parses as a URL.
pub fn is_well_formed(url: &str) -> bool {
    url.validate_url()
}
