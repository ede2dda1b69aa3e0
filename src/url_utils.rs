//! URL Utility Functions
//!
//! Resolves anchor hrefs the way a browser exposes `HTMLAnchorElement.href`:
//! relative references become absolute against the page's base URL.

use url::Url;

use crate::error::Result;

/// Schemes whose hrefs are reported verbatim instead of being resolved.
const OPAQUE_PREFIXES: [&str; 4] = ["data:", "javascript:", "mailto:", "tel:"];

/// Check if a string is a valid absolute http(s) URL with a host.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }

    Url::parse(s).is_ok_and(|url| url.host().is_some())
}

/// Parse a configured base URL.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidBaseUrl`] if `base` is not a valid URL.
pub fn parse_base_url(base: &str) -> Result<Url> {
    Ok(Url::parse(base.trim())?)
}

/// Resolve an anchor href against an optional base URL.
///
/// Blank hrefs resolve to `None`. Absolute URLs, opaque schemes, and any
/// href that cannot be joined are returned unchanged.
#[must_use]
pub fn resolve_href(href: &str, base: Option<&Url>) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if OPAQUE_PREFIXES.iter().any(|p| lowered.starts_with(p)) || is_absolute_url(href) {
        return Some(href.to_string());
    }

    let resolved = base
        .and_then(|base| base.join(href).ok())
        .map_or_else(|| href.to_string(), String::from);

    Some(resolved)
}
