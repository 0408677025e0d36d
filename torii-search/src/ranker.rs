//! Relevance ordering for matched catalog entries.

use torii_core::{CatalogEntry, SearchConfig};

use crate::distance::levenshtein;

/// Transient ranking record for one matched entry.
///
/// Recomputed per query and discarded once the suggestion list is rendered;
/// nothing here is persisted.
#[derive(Debug, Clone)]
pub struct SuggestionResult<'a> {
    pub entry: &'a CatalogEntry,
    pub distance: usize,
    pub exact_substring: bool,
}

/// Orders matched entries by relevance and truncates to the configured cap.
///
/// Ascending sort key: match tier (exact substring before fuzzy-only), edit
/// distance, then title length. The sort is stable, so ties beyond those
/// keys keep cache order and identical input always produces identical
/// output. `query` must already be lowercased.
pub fn rank<'a>(
    query: &str,
    candidates: Vec<&'a CatalogEntry>,
    config: &SearchConfig,
) -> Vec<SuggestionResult<'a>> {
    let mut results: Vec<SuggestionResult<'a>> = candidates
        .into_iter()
        .map(|entry| {
            let title = entry.title.to_lowercase();
            SuggestionResult {
                entry,
                distance: levenshtein(query, &title),
                exact_substring: title.contains(query),
            }
        })
        .collect();

    results.sort_by_key(|result| {
        (
            u8::from(!result.exact_substring),
            result.distance,
            result.entry.title.chars().count(),
        )
    });
    results.truncate(config.max_results);

    results
}
