//! Match decision combining substring containment with typo tolerance.

use torii_core::SearchConfig;

use crate::distance::levenshtein;

/// Maximum edit distance tolerated for `query`.
///
/// Grows with query length so longer queries absorb proportionally more
/// typos while short queries stay strict. Computed from the query, not the
/// title: a short query against a long title keeps its small budget.
pub fn fuzzy_threshold(query: &str, config: &SearchConfig) -> usize {
    config
        .fuzzy_floor
        .max(query.chars().count() / config.fuzzy_divisor)
}

/// Decides whether `title` matches `query`.
///
/// Both sides must already be lowercased. A title matches when it contains
/// the query as a substring, or when its edit distance from the query stays
/// within [`fuzzy_threshold`]. Queries below the configured minimum length
/// are rejected by the index before this is consulted.
pub fn matches(query: &str, title: &str, config: &SearchConfig) -> bool {
    title.contains(query) || levenshtein(query, title) <= fuzzy_threshold(query, config)
}
