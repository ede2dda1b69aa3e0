//! # reso-sorter
//!
//! Finds display and video resolutions written in page text (`1920x1080`,
//! `4,096×2,160`, `1080p`), deduplicates and validates them, computes their
//! pixel area and keeps them in a sortable ranked list.
//!
//! ## Quick Start
//!
//! ```rust
//! use reso_sorter::{scan, SortKey};
//!
//! let html = r#"<html><body>
//!   <a href="http://a/">Download 1920x1080 here</a>
//!   <p>also 1,920x1,080 available, or 720p</p>
//! </body></html>"#;
//!
//! let mut ranker = scan(html)?;
//! assert_eq!(ranker.records()[0].original(), "1920x1080");
//! assert_eq!(ranker.records()[0].link().as_str(), "http://a/");
//!
//! // Header click: sort by width, then click again to flip direction
//! ranker.sort_by(SortKey::Width, true);
//! ranker.sort_by(SortKey::Width, true);
//! assert_eq!(ranker.records()[0].width(), 1280);
//! # Ok::<(), reso_sorter::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Matcher** finds resolution tokens in a text blob
//! - **Extractor** pairs every token with its fragment's link
//! - **Deduplicator** keeps one candidate per resolution, preferring linked ones
//! - **Validator** parses widths and heights and drops implausible values
//! - **Ranker** orders the records and toggles sort direction
//!
//! Hosts that already walk their own document can skip the HTML scanner and
//! feed [`TextFragment`]s to [`rank_fragments`] directly.

mod error;
mod extract;
mod options;
mod patterns;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Charset detection for raw page bytes.
pub mod encoding;

/// Resolution token matching.
pub mod matcher;

/// Candidate extraction from text fragments.
pub mod extractor;

/// Candidate deduplication.
pub mod dedup;

/// Token parsing and plausibility checks.
pub mod validate;

/// Validated resolution records.
pub mod record;

/// Record ordering.
pub mod ranker;

/// HTML page scanner producing text fragments.
pub mod page;

/// Text table and JSON output.
pub mod render;

/// Href resolution.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Rejection, Result};
pub use extract::validate_candidates;
pub use extractor::{Link, RawCandidate, TextFragment, NO_LINK};
pub use options::Options;
pub use ranker::{Direction, Ranker, SortKey};
pub use record::ResolutionRecord;

/// Scans an HTML document using default options.
///
/// Records come back ordered by area, largest first.
#[allow(clippy::missing_errors_doc)]
pub fn scan(html: &str) -> Result<Ranker> {
    scan_with_options(html, &Options::default())
}

/// Scans an HTML document with custom options.
///
/// # Errors
///
/// Returns [`Error::InvalidBaseUrl`] if `options.base_url` cannot be parsed.
/// Finding nothing is not an error: a page without resolutions yields an empty
/// [`Ranker`].
///
/// # Example
///
/// ```rust
/// use reso_sorter::{scan_with_options, Options};
///
/// let html = r#"<a href="/big.png">3840x2160</a>"#;
/// let options = Options {
///     base_url: Some("https://example.com/".to_string()),
///     ..Options::default()
/// };
/// let ranker = scan_with_options(html, &options)?;
/// assert_eq!(ranker.records()[0].link().as_str(), "https://example.com/big.png");
/// # Ok::<(), reso_sorter::Error>(())
/// ```
pub fn scan_with_options(html: &str, options: &Options) -> Result<Ranker> {
    extract::scan_html(html, options)
}

/// Scans HTML bytes, detecting the character encoding first.
#[allow(clippy::missing_errors_doc)]
pub fn scan_bytes(html: &[u8]) -> Result<Ranker> {
    scan_bytes_with_options(html, &Options::default())
}

/// Scans HTML bytes with custom options, detecting the character encoding first.
///
/// # Example
///
/// ```rust
/// use reso_sorter::{scan_bytes_with_options, Options};
///
/// // windows-1252 encoded multiplication sign
/// let html = b"<meta charset=\"windows-1252\"><p>4,096\xD72,160</p>";
/// let ranker = scan_bytes_with_options(html, &Options::default())?;
/// assert_eq!(ranker.records()[0].width(), 4096);
/// # Ok::<(), reso_sorter::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn scan_bytes_with_options(html: &[u8], options: &Options) -> Result<Ranker> {
    let html = encoding::decode_page(html);
    scan_with_options(&html, options)
}

/// Runs the extraction pass over host-supplied fragments.
///
/// Never fails: rejected candidates are filtered out, and an input with no
/// valid resolutions yields an empty [`Ranker`].
///
/// # Example
///
/// ```rust
/// use reso_sorter::{rank_fragments, Options, TextFragment};
///
/// let fragments = vec![
///     TextFragment::new("Download 1920x1080 here", Some("http://a")),
///     TextFragment::new("junk 3x3", Some("http://b")),
/// ];
/// let ranker = rank_fragments(&fragments, &Options::default());
/// assert_eq!(ranker.len(), 1);
/// ```
#[must_use]
pub fn rank_fragments<'a, I>(fragments: I, options: &Options) -> Ranker
where
    I: IntoIterator<Item = &'a TextFragment>,
{
    extract::rank_fragments(fragments, options)
}
