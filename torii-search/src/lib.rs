//! Torii Search - Incremental fuzzy search over the catalog cache
//!
//! Combines substring containment with bounded edit-distance matching to
//! rank catalog titles against as-you-type queries. Every function here is
//! total: bad input degrades to an empty result list, never an error.

pub mod distance;
pub mod index;
pub mod matcher;
pub mod ranker;

// Re-export main types
pub use distance::levenshtein;
pub use index::SearchIndex;
pub use matcher::{fuzzy_threshold, matches};
pub use ranker::{SuggestionResult, rank};
