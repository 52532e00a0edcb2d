use once_cell::sync::Lazy;
use regex::Regex;

/// Scheme prepended to links that carry none.
pub const DEFAULT_SCHEME: &str = "http://";

static SCHEME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:[a-z][a-z0-9+.\-]*://|mailto:|tel:)").expect("scheme pattern is valid")
});

/// True if `url` already starts with a recognized scheme.
pub fn has_scheme(url: &str) -> bool {
    SCHEME.is_match(url.trim_start())
}

/// Returns `url` unchanged when it has a scheme, otherwise prefixed with
/// `default_scheme`. Blank input stays blank.
pub fn normalize_url(url: &str, default_scheme: &str) -> String {
    let url = url.trim();
    if url.is_empty() || has_scheme(url) {
        url.to_string()
    } else {
        format!("{}{}", default_scheme, url)
    }
}
