//! Canonicalization and deduplication of raw candidates.
//!
//! Candidates are keyed by [`RawCandidate::canonical_key`]. The first candidate for
//! a key is kept, and may be replaced exactly once: by the first later
//! candidate that carries a real link while the kept one does not.

use std::collections::HashMap;

use crate::extractor::RawCandidate;

/// One surviving candidate per canonical key.
pub type UniqueCandidate = RawCandidate;

/// Collapses `candidates` to one entry per canonical key.
///
/// The result keeps first-seen key order; an upgraded entry stays in the
/// slot of the candidate it replaced.
#[must_use]
pub fn deduplicate<I>(candidates: I) -> Vec<UniqueCandidate>
where
    I: IntoIterator<Item = RawCandidate>,
{
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<UniqueCandidate> = Vec::new();

    for candidate in candidates {
        let key = candidate.canonical_key();
        match slots.get(&key).copied() {
            None => {
                slots.insert(key, unique.len());
                unique.push(candidate);
            }
            Some(slot) => {
                let kept = &mut unique[slot];
                if !kept.link.is_present() && candidate.link.is_present() {
                    log::trace!("{key}: upgrading to link {}", candidate.link);
                    *kept = candidate;
                }
            }
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::Link;

    fn candidate(token: &str, link: Option<&str>) -> RawCandidate {
        RawCandidate {
            token: token.to_string(),
            link: Link::from_host(link),
        }
    }

    #[test]
    fn first_linked_candidate_wins() {
        let unique = deduplicate(vec![
            candidate("1920x1080", Some("http://a")),
            candidate("1920x1080", Some("http://b")),
            candidate("1920x1080", None),
        ]);
        assert_eq!(unique, vec![candidate("1920x1080", Some("http://a"))]);
    }

    #[test]
    fn unlinked_candidate_upgrades_once() {
        let unique = deduplicate(vec![
            candidate("720p", None),
            candidate("720p", Some("http://first")),
            candidate("720p", Some("http://second")),
        ]);
        assert_eq!(unique, vec![candidate("720p", Some("http://first"))]);
    }

    #[test]
    fn upgrade_keeps_replacement_token_and_original_slot() {
        let unique = deduplicate(vec![
            candidate("1920x1080", None),
            candidate("640x480", None),
            candidate("1920X1080", Some("http://a")),
        ]);
        assert_eq!(
            unique,
            vec![
                candidate("1920X1080", Some("http://a")),
                candidate("640x480", None),
            ]
        );
    }

    #[test]
    fn case_and_separator_variants_collapse() {
        let unique = deduplicate(vec![
            candidate("1920x1080", None),
            candidate("1920X1080", None),
            candidate("1,920x1,080", None),
            candidate("1080p", None),
        ]);
        let tokens: Vec<_> = unique.iter().map(|c| c.token.as_str()).collect();
        assert_eq!(tokens, vec!["1920x1080", "1080p"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(deduplicate(Vec::new()).is_empty());
    }
}
