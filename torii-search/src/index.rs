//! In-memory catalog cache and the search entry point.

use tracing::{debug, warn};

use torii_core::{CatalogEntry, CatalogProvider, SearchConfig};

use crate::{matcher, ranker};

/// Owns the client-side catalog cache and answers suggestion queries.
///
/// The cache is a full-replace snapshot: populated once at startup, read
/// thereafter. Instances are independent, so tests can hold several
/// side by side.
#[derive(Debug)]
pub struct SearchIndex {
    cache: Vec<CatalogEntry>,
    config: SearchConfig,
}

impl SearchIndex {
    /// Creates an empty index with default search parameters.
    pub fn new() -> Self {
        Self::with_config(SearchConfig::default())
    }

    /// Creates an empty index with custom search parameters.
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            cache: Vec::new(),
            config,
        }
    }

    /// Replaces the cache wholesale with a new snapshot.
    ///
    /// An empty snapshot is valid; subsequent searches simply return no
    /// results. There is no partial merge.
    pub fn load(&mut self, entries: Vec<CatalogEntry>) {
        debug!(entries = entries.len(), "catalog cache replaced");
        self.cache = entries;
    }

    /// One-shot, best-effort population from a provider.
    ///
    /// A failed fetch is logged and leaves the cache as it was, degrading
    /// search to empty results instead of surfacing an error.
    pub async fn populate(&mut self, provider: &dyn CatalogProvider) {
        match provider.fetch_catalog().await {
            Ok(entries) => self.load(entries),
            Err(error) => warn!(%error, "catalog fetch failed, search will return no results"),
        }
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// The search parameters this index was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the top matches for `query`, best first.
    ///
    /// Fails soft: a query below the minimum length, an empty cache, or no
    /// matching candidate all yield an empty list. Entries without a
    /// derivable navigation target are skipped. Pure given the cache
    /// snapshot: the same `(cache, query)` always produces the same output.
    pub fn search(&self, query: &str) -> Vec<CatalogEntry> {
        if query.chars().count() < self.config.min_query_len {
            return Vec::new();
        }

        let query = query.to_lowercase();
        let candidates: Vec<&CatalogEntry> = self
            .cache
            .iter()
            .filter(|entry| entry.first_target().is_some())
            .filter(|entry| matcher::matches(&query, &entry.title.to_lowercase(), &self.config))
            .collect();

        let ranked = ranker::rank(&query, candidates, &self.config);
        debug!(%query, matches = ranked.len(), "search completed");

        ranked
            .into_iter()
            .map(|result| result.entry.clone())
            .collect()
    }
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self::new()
    }
}
