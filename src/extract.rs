//! Extraction pass orchestration.
//!
//! Runs matcher, extractor, deduplicator and validator over a fragment
//! sequence in one synchronous pass and hands the surviving records to a
//! [`Ranker`].

use crate::dedup::{self, UniqueCandidate};
use crate::dom;
use crate::error::Result;
use crate::extractor::{self, TextFragment};
use crate::options::Options;
use crate::page;
use crate::ranker::Ranker;
use crate::record::ResolutionRecord;
use crate::url_utils;

/// Converts unique candidates to records, silently dropping rejections.
#[must_use]
pub fn validate_candidates(candidates: &[UniqueCandidate]) -> Vec<ResolutionRecord> {
    candidates
        .iter()
        .filter_map(|candidate| match ResolutionRecord::try_from(candidate) {
            Ok(record) => Some(record),
            Err(rejection) => {
                log::debug!("dropping candidate: {rejection}");
                None
            }
        })
        .collect()
}

/// Full pass over host-supplied fragments, unordered.
pub(crate) fn records_from_fragments<'a, I>(fragments: I) -> Vec<ResolutionRecord>
where
    I: IntoIterator<Item = &'a TextFragment>,
{
    let raw = extractor::extract_candidates(fragments);
    let raw_count = raw.len();
    let unique = dedup::deduplicate(raw);
    let records = validate_candidates(&unique);

    log::debug!(
        "{raw_count} raw candidates, {} unique, {} valid",
        unique.len(),
        records.len()
    );
    records
}

pub(crate) fn rank_fragments<'a, I>(fragments: I, options: &Options) -> Ranker
where
    I: IntoIterator<Item = &'a TextFragment>,
{
    let records = records_from_fragments(fragments);
    Ranker::with_order(records, options.initial_sort, options.initial_direction)
}

pub(crate) fn scan_html(html: &str, options: &Options) -> Result<Ranker> {
    let base = options
        .base_url
        .as_deref()
        .map(url_utils::parse_base_url)
        .transpose()?;

    let doc = dom::parse(html);
    let fragments = page::collect_fragments(&doc, options.scope.as_deref(), base.as_ref());
    Ok(rank_fragments(&fragments, options))
}
