//! Validated resolution records.
//!
//! A [`ResolutionRecord`] can only be built through [`TryFrom`], which parses
//! the candidate token and enforces the plausibility window. Fields are
//! read-only afterwards.

use serde::Serialize;

use crate::dedup::UniqueCandidate;
use crate::error::Rejection;
use crate::extractor::Link;
use crate::validate;

/// Smallest width or height (exclusive) a record may have.
pub const MIN_DIMENSION: u64 = 10;

/// Smallest pixel area (exclusive) a record may have.
pub const MIN_AREA: u64 = 1000;

/// A validated resolution ready for display and sorting.
///
/// Invariants: `width > 10`, `height > 10`, `area > 1000` and
/// `area == width * height`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionRecord {
    original: String,
    width: u64,
    height: u64,
    area: u64,
    link: Link,
}

impl ResolutionRecord {
    /// Matched token as it appeared in the page.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[must_use]
    pub fn width(&self) -> u64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u64 {
        self.height
    }

    /// Pixel area, `width * height`.
    #[must_use]
    pub fn area(&self) -> u64 {
        self.area
    }

    #[must_use]
    pub fn link(&self) -> &Link {
        &self.link
    }
}

impl TryFrom<&UniqueCandidate> for ResolutionRecord {
    type Error = Rejection;

    fn try_from(candidate: &UniqueCandidate) -> Result<Self, Self::Error> {
        let (width, height) = validate::parse_dimensions(&candidate.token)?;
        let area = validate::check_bounds(width, height)?;

        Ok(Self {
            original: candidate.token.clone(),
            width,
            height,
            area,
            link: candidate.link.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(token: &str) -> UniqueCandidate {
        UniqueCandidate {
            token: token.to_string(),
            link: Link::Href("http://a".to_string()),
        }
    }

    #[test]
    fn record_keeps_original_token_and_link() {
        let record = ResolutionRecord::try_from(&candidate("1,920x1,080")).expect("valid");
        assert_eq!(record.original(), "1,920x1,080");
        assert_eq!(record.width(), 1920);
        assert_eq!(record.height(), 1080);
        assert_eq!(record.area(), 2_073_600);
        assert_eq!(record.link(), &Link::Href("http://a".to_string()));
    }

    #[test]
    fn rejected_candidates_build_nothing() {
        assert!(matches!(
            ResolutionRecord::try_from(&candidate("5x5")),
            Err(Rejection::OutOfBounds { .. })
        ));
        assert!(matches!(
            ResolutionRecord::try_from(&candidate("1x2x3")),
            Err(Rejection::Unparseable(_))
        ));
    }

    #[test]
    fn serializes_missing_link_as_null() {
        let unlinked = UniqueCandidate {
            token: "720p".to_string(),
            link: Link::Missing,
        };
        let record = ResolutionRecord::try_from(&unlinked).expect("valid");
        let json = serde_json::to_value(&record).expect("serializable");
        assert_eq!(json["width"], 1280);
        assert!(json["link"].is_null());
    }
}
