//! Ordering of validated records.
//!
//! The [`Ranker`] owns the record collection. Callers read it through
//! [`Ranker::records`] and reorder it only through [`Ranker::sort_by`] or
//! [`Ranker::sort_with`]; records themselves are never modified.
//!
//! Sorting is unstable and has no secondary key, so records with equal sort
//! values may appear in any relative order after a re-sort.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::record::ResolutionRecord;

/// Column a record collection can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Original,
    Width,
    Height,
    Area,
    Link,
}

impl SortKey {
    /// All keys, in table column order.
    pub const ALL: [Self; 5] = [
        Self::Original,
        Self::Width,
        Self::Height,
        Self::Area,
        Self::Link,
    ];

    /// Key name as used by callers (`"area"`, `"link"`, ...).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Width => "width",
            Self::Height => "height",
            Self::Area => "area",
            Self::Link => "link",
        }
    }

    /// Compares two records on this key, ascending.
    ///
    /// Numeric keys compare as numbers, string keys case-insensitively.
    #[must_use]
    pub fn compare(self, a: &ResolutionRecord, b: &ResolutionRecord) -> Ordering {
        match self {
            Self::Width => a.width().cmp(&b.width()),
            Self::Height => a.height().cmp(&b.height()),
            Self::Area => a.area().cmp(&b.area()),
            Self::Original => cmp_ignore_case(a.original(), b.original()),
            Self::Link => cmp_ignore_case(a.link().as_str(), b.link().as_str()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`SortKey`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key `{0}` (expected original, width, height, area or link)")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    #[default]
    Descending,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Owns the ranked record collection and the sort control state.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    records: Vec<ResolutionRecord>,
    /// Last explicitly requested key and the direction it was applied with.
    last_request: Option<(SortKey, Direction)>,
}

impl Ranker {
    /// Takes ownership of `records` and orders them by area, largest first.
    #[must_use]
    pub fn new(records: Vec<ResolutionRecord>) -> Self {
        Self::with_order(records, SortKey::Area, Direction::Descending)
    }

    /// Takes ownership of `records` and applies an initial order.
    ///
    /// The initial order is not remembered as a request, so the first
    /// [`sort_by`](Self::sort_by) on any key starts out descending.
    #[must_use]
    pub fn with_order(records: Vec<ResolutionRecord>, key: SortKey, direction: Direction) -> Self {
        let mut ranker = Self {
            records,
            last_request: None,
        };
        ranker.apply(key, direction);
        ranker
    }

    /// Reorders by `key`, toggling the direction on repeated requests.
    ///
    /// When `toggle_direction` is set and `key` was also the previous
    /// request, the previous direction is flipped. Otherwise the sort is
    /// descending.
    pub fn sort_by(&mut self, key: SortKey, toggle_direction: bool) -> &[ResolutionRecord] {
        let direction = match self.last_request {
            Some((last, direction)) if toggle_direction && last == key => direction.toggled(),
            _ => Direction::Descending,
        };
        self.sort_with(key, direction)
    }

    /// Reorders by `key` in an explicit direction.
    pub fn sort_with(&mut self, key: SortKey, direction: Direction) -> &[ResolutionRecord] {
        log::debug!("sorting {} records by {key} ({direction:?})", self.records.len());
        self.apply(key, direction);
        self.last_request = Some((key, direction));
        &self.records
    }

    fn apply(&mut self, key: SortKey, direction: Direction) {
        match direction {
            Direction::Ascending => self.records.sort_unstable_by(|a, b| key.compare(a, b)),
            Direction::Descending => self.records.sort_unstable_by(|a, b| key.compare(b, a)),
        }
    }

    /// Records in their current order.
    #[must_use]
    pub fn records(&self) -> &[ResolutionRecord] {
        &self.records
    }

    /// The last requested key and direction, if any request was made.
    #[must_use]
    pub fn last_request(&self) -> Option<(SortKey, Direction)> {
        self.last_request
    }

    /// Empty-result signal for the presentation layer.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Consumes the ranker, returning the records in their current order.
    #[must_use]
    pub fn into_records(self) -> Vec<ResolutionRecord> {
        self.records
    }
}
