//! Candidate extraction from host-supplied text fragments.
//!
//! Pairs each matched token with the link associated with the fragment it
//! was found in.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::matcher;

/// Display sentinel for a fragment that had no enclosing anchor.
pub const NO_LINK: &str = "No link";

/// Link associated with a candidate or record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Link {
    /// No enclosing anchor. Renders as [`NO_LINK`].
    #[default]
    Missing,
    /// Href of the nearest enclosing anchor.
    Href(String),
}

impl Link {
    /// Normalizes a host-supplied link.
    ///
    /// `None`, blank strings and the literal `"No link"` sentinel all become
    /// [`Link::Missing`].
    #[must_use]
    pub fn from_host(link: Option<&str>) -> Self {
        match link.map(str::trim) {
            Some(href) if !href.is_empty() && href != NO_LINK => Self::Href(href.to_string()),
            _ => Self::Missing,
        }
    }

    /// True if this is a real link rather than the sentinel.
    #[inline]
    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Href(_))
    }

    /// The href, or [`NO_LINK`].
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Missing => NO_LINK,
            Self::Href(href) => href,
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Link {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Missing => serializer.serialize_none(),
            Self::Href(href) => serializer.serialize_some(href),
        }
    }
}

/// One scanned node as supplied by the host environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    /// Full text content of the node.
    pub text: String,

    /// Href of the nearest enclosing anchor, if any.
    pub associated_link: Option<String>,
}

impl TextFragment {
    /// Creates a fragment from text and an optional link.
    #[must_use]
    pub fn new(text: impl Into<String>, associated_link: Option<impl Into<String>>) -> Self {
        Self {
            text: text.into(),
            associated_link: associated_link.map(Into::into),
        }
    }
}

/// A matched token and the link of the fragment it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCandidate {
    /// Exact matched substring, separators and case preserved.
    pub token: String,

    /// Link shared by every candidate from the same fragment.
    pub link: Link,
}

impl RawCandidate {
    /// Key used to detect duplicates.
    ///
    /// The token lower-cased, with thousands separators dropped and `×`
    /// folded to `x`, so `1,920X1,080` and `1920x1080` collide.
    #[must_use]
    pub fn canonical_key(&self) -> String {
        self.token
            .chars()
            .filter(|c| !matches!(c, '.' | ','))
            .map(|c| if c == '×' { 'x' } else { c.to_ascii_lowercase() })
            .collect()
    }
}

/// Runs the matcher over every fragment and emits one candidate per match.
///
/// Output order is fragment order, then match order within a fragment.
pub fn extract_candidates<'a, I>(fragments: I) -> Vec<RawCandidate>
where
    I: IntoIterator<Item = &'a TextFragment>,
{
    let mut candidates = Vec::new();

    for fragment in fragments {
        let link = Link::from_host(fragment.associated_link.as_deref());
        for token in matcher::find_tokens(&fragment.text) {
            log::trace!("candidate {token} ({link})");
            candidates.push(RawCandidate {
                token: token.to_string(),
                link: link.clone(),
            });
        }
    }

    candidates
}
