//! Resolution token matching.
//!
//! Finds resolution-shaped substrings in a text blob. No numeric plausibility
//! checks happen here; that is left to [`crate::validate`].

use crate::patterns::RESOLUTION_TOKEN;

/// Lazily yields every resolution token in `text`, left to right.
///
/// Each call starts a fresh scan from the beginning of `text`. Tokens are the
/// exact matched substrings with their original separators and case.
///
/// # Example
///
/// ```rust
/// use reso_sorter::matcher::find_tokens;
///
/// let tokens: Vec<&str> = find_tokens("Sizes: 1920x1080, 4,096X2,160 or 720p").collect();
/// assert_eq!(tokens, vec!["1920x1080", "4,096X2,160", "720p"]);
/// ```
pub fn find_tokens(text: &str) -> impl Iterator<Item = &str> + '_ {
    RESOLUTION_TOKEN.find_iter(text).map(|m| m.as_str())
}

/// Whether `text` contains at least one resolution token.
#[inline]
#[must_use]
pub fn has_token(text: &str) -> bool {
    RESOLUTION_TOKEN.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_explicit_and_shorthand_in_order() {
        let tokens: Vec<_> = find_tokens("720p first, then 1280x720").collect();
        assert_eq!(tokens, vec!["720p", "1280x720"]);
    }

    #[test]
    fn explicit_form_wins_over_shorthand() {
        // "1080p" alone is shorthand, but inside an explicit token it is not re-reported
        let tokens: Vec<_> = find_tokens("2,560x1,440").collect();
        assert_eq!(tokens, vec!["2,560x1,440"]);
    }

    #[test]
    fn no_plausibility_filtering() {
        let tokens: Vec<_> = find_tokens("junk 3x3 and 1p").collect();
        assert_eq!(tokens, vec!["3x3", "1p"]);
    }

    #[test]
    fn restarts_on_every_call() {
        let text = "640x480";
        assert_eq!(find_tokens(text).count(), 1);
        assert_eq!(find_tokens(text).count(), 1);
    }

    #[test]
    fn ignores_tokens_embedded_in_words() {
        assert!(!has_token("model X1920x1080Z"));
        assert!(!has_token("no digits here"));
        assert!(has_token("(1920x1080)"));
    }
}
