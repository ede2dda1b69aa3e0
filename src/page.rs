//! Host-side page scanner.
//!
//! Turns an HTML document into the [`TextFragment`] sequence the extraction
//! pipeline consumes: one fragment per element, in document order, carrying
//! the element's full text content and the href of its nearest enclosing
//! anchor.
//!
//! Nested elements repeat their descendants' text, so the same token is
//! usually seen several times with different links. The deduplicator
//! resolves that.

use url::Url;

use crate::dom::{self, Document, Selection};
use crate::extractor::TextFragment;
use crate::matcher;
use crate::url_utils;

/// Selector used when no scope is configured.
const ALL_ELEMENTS: &str = "*";

/// Collects text fragments from a parsed document.
///
/// Elements whose text holds no resolution token are skipped; they could
/// not contribute a candidate.
#[must_use]
pub fn collect_fragments(doc: &Document, scope: Option<&str>, base: Option<&Url>) -> Vec<TextFragment> {
    let elements = match scope {
        None => doc.select(ALL_ELEMENTS),
        Some(selector) => match doc.try_select(selector) {
            Some(selection) => selection,
            None => {
                log::debug!("scope `{selector}` matched nothing or is invalid");
                return Vec::new();
            }
        },
    };

    let fragments: Vec<TextFragment> = elements
        .iter()
        .filter_map(|element| fragment_for(&element, base))
        .collect();

    log::debug!(
        "scanned {} elements, {} carry resolution tokens",
        elements.length(),
        fragments.len()
    );
    fragments
}

fn fragment_for(element: &Selection, base: Option<&Url>) -> Option<TextFragment> {
    let text = dom::text_content(element);
    if !matcher::has_token(&text) {
        return None;
    }

    Some(TextFragment {
        text: text.to_string(),
        associated_link: associated_link(element, base),
    })
}

/// Href of the nearest anchor enclosing `element`, resolved against `base`.
#[must_use]
pub fn associated_link(element: &Selection, base: Option<&Url>) -> Option<String> {
    let anchor = dom::closest(element, "a")?;
    let href = dom::get_attribute(&anchor, "href")?;
    url_utils::resolve_href(&href, base)
}
