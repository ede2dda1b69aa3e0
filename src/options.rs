//! Configuration options for page scanning.
//!
//! The `Options` struct controls how the host scanner walks a page and how
//! the resulting records are first ordered.

use crate::ranker::{Direction, SortKey};

/// Configuration options for page scanning.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use reso_sorter::{Direction, Options, SortKey};
///
/// let options = Options {
///     base_url: Some("https://example.com/wallpapers/".to_string()),
///     initial_sort: SortKey::Width,
///     initial_direction: Direction::Ascending,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// URL of the scanned page, used to make relative hrefs absolute.
    ///
    /// Default: `None` (relative hrefs are reported as written)
    pub base_url: Option<String>,

    /// CSS selector limiting which elements are scanned.
    ///
    /// Every matching element contributes its full text content. An invalid
    /// selector scans nothing.
    ///
    /// Default: `None` (every element)
    pub scope: Option<String>,

    /// Key the records are ordered by once scanning completes.
    ///
    /// Default: `SortKey::Area`
    pub initial_sort: SortKey,

    /// Direction of the initial order.
    ///
    /// Default: `Direction::Descending`
    pub initial_direction: Direction,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: None,
            scope: None,
            initial_sort: SortKey::Area,
            initial_direction: Direction::Descending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_orders_by_area_descending() {
        let opts = Options::default();

        assert!(opts.base_url.is_none());
        assert!(opts.scope.is_none());
        assert_eq!(opts.initial_sort, SortKey::Area);
        assert_eq!(opts.initial_direction, Direction::Descending);
    }

    #[test]
    fn fields_can_be_overridden() {
        let opts = Options {
            scope: Some("article, article *".to_string()),
            initial_sort: SortKey::Link,
            ..Options::default()
        };

        assert_eq!(opts.scope.as_deref(), Some("article, article *"));
        assert_eq!(opts.initial_sort, SortKey::Link);
        assert_eq!(opts.initial_direction, Direction::Descending);
    }
}
