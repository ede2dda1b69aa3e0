//! Compiled regex patterns for resolution matching.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Resolution Tokens
// =============================================================================

/// A single quantity: grouped thousands (`4,096`, `4.096`) or a plain ASCII digit run.
///
/// The grouped form must come first so `1,920` is not cut short at `1`.
const QUANTITY: &str = r"(?:[0-9]{1,3}(?:[.,][0-9]{3})+|[0-9]+)";

/// Matches explicit (`1920x1080`, `4,096×2,160`) and shorthand (`1080p`) tokens.
///
/// The explicit alternative is listed first so a span that could satisfy both
/// is reported once, as the explicit form.
pub static RESOLUTION_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b{QUANTITY}[x×]{QUANTITY}\b|\b{QUANTITY}p\b"
    ))
    .expect("RESOLUTION_TOKEN regex")
});

// =============================================================================
// Token Normalization
// =============================================================================

/// Thousands separators stripped before numeric parsing.
pub static THOUSANDS_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.,]").expect("THOUSANDS_SEPARATOR regex"));

// =============================================================================
// Charset Detection
// =============================================================================

/// Match `<meta charset="...">` tag
pub static CHARSET_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/]+)"#).expect("CHARSET_META regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
pub static CONTENT_TYPE_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("CONTENT_TYPE_CHARSET regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    fn all(text: &str) -> Vec<&str> {
        RESOLUTION_TOKEN.find_iter(text).map(|m| m.as_str()).collect()
    }

    #[test]
    fn resolution_token_matches_both_notations() {
        assert_eq!(all("1920x1080 and 720p"), vec!["1920x1080", "720p"]);
        assert_eq!(all("4,096×2,160"), vec!["4,096×2,160"]);
        assert_eq!(all("4.320P"), vec!["4.320P"]);
    }

    #[test]
    fn resolution_token_requires_word_boundaries() {
        assert!(all("abc1920x1080").is_empty());
        assert!(all("1920x1080px").is_empty());
        assert!(all("v1080p").is_empty());
    }

    #[test]
    fn thousands_separator_strips_dots_and_commas() {
        assert_eq!(THOUSANDS_SEPARATOR.replace_all("4,096x2.160", ""), "4096x2160");
    }
}
