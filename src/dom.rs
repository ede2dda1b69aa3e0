//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate used by the page scanner. Only
//! read-only operations are needed: the scanner never mutates the document.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attributes & Tags ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_ascii_lowercase())
}

// === Text Content ===

/// Get all text content of node and descendants, like `Node.textContent`.
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

// === Tree Navigation ===

/// Get parent element
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Nearest element with tag `tag`, starting at `sel` itself and walking up.
///
/// Same contract as `Element.closest(tag)` for a plain tag selector.
#[must_use]
pub fn closest<'a>(sel: &Selection<'a>, tag: &str) -> Option<Selection<'a>> {
    let mut current = sel.clone();

    while current.exists() {
        if tag_name(&current).is_some_and(|name| name == tag) {
            return Some(current);
        }
        current = parent(&current);
    }

    None
}
