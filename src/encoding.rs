//! Character encoding detection for raw page bytes.
//!
//! A byte order mark wins, then the first `<meta>` charset declaration in the
//! document head. Pages with neither are treated as UTF-8.

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::{CHARSET_META, CONTENT_TYPE_CHARSET};

/// Number of leading bytes searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Detect the character encoding of an HTML page.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    [&*CHARSET_META, &*CONTENT_TYPE_CHARSET]
        .iter()
        .filter_map(|re| re.captures(&head).and_then(|c| c.get(1)))
        .find_map(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode page bytes to UTF-8, replacing invalid sequences with U+FFFD.
#[must_use]
pub fn decode_page(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    log::debug!("decoding page as {}", encoding.name());

    // decode() also strips a matching BOM
    let (decoded, _used, had_errors) = encoding.decode(html);
    if had_errors {
        log::debug!("page contained malformed {} sequences", encoding.name());
    }
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bom_overrides_meta() {
        let mut html = vec![0xEF, 0xBB, 0xBF];
        html.extend_from_slice(br#"<meta charset="windows-1252">"#);
        assert_eq!(detect_encoding(&html), UTF_8);
    }

    #[test]
    fn meta_charset_is_detected() {
        let html = br#"<html><head><meta charset="ISO-8859-1"></head></html>"#;
        // WHATWG maps ISO-8859-1 to windows-1252
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn content_type_charset_is_detected() {
        let html = br#"<META HTTP-EQUIV="content-type" CONTENT="text/html; CHARSET=Shift_JIS">"#;
        assert_eq!(detect_encoding(html).name(), "Shift_JIS");
    }

    #[test]
    fn unknown_label_falls_back_to_utf8() {
        let html = br#"<meta charset="no-such-charset">"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn decodes_legacy_bytes() {
        // 0xD7 is the multiplication sign in windows-1252
        let html = b"<meta charset=\"windows-1252\"><p>4,096\xD72,160</p>";
        assert!(decode_page(html).contains("4,096×2,160"));
    }

    #[test]
    fn invalid_utf8_does_not_panic() {
        let html = b"<p>1920x1080 \xFF\xFE</p>";
        let decoded = decode_page(html);
        assert!(decoded.contains("1920x1080"));
        assert!(decoded.contains('\u{FFFD}'));
    }
}
