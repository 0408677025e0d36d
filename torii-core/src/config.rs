//! Centralized configuration for Torii.
//!
//! All tunable parameters and settings are defined here to avoid
//! hard-coded values scattered throughout the codebase.

use std::time::Duration;

/// Central configuration for all Torii components.
///
/// Groups related configuration settings into logical sections.
#[derive(Debug, Clone, Default)]
pub struct ToriiConfig {
    pub search: SearchConfig,
    pub ui: UiConfig,
}

/// Matching and ranking parameters for catalog search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Minimum query length in characters before a search runs
    pub min_query_len: usize,
    /// Maximum number of suggestions returned per query
    pub max_results: usize,
    /// Lower bound on typo tolerance regardless of query length
    pub fuzzy_floor: usize,
    /// Query-length divisor controlling how typo tolerance grows
    pub fuzzy_divisor: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: 2,
            max_results: 5,
            fuzzy_floor: 2,
            fuzzy_divisor: 3,
        }
    }
}

/// Input handling parameters for the suggestion widget.
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Quiescence window after the last keystroke before a search triggers
    pub debounce: Duration,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_widget_behavior() {
        let config = ToriiConfig::default();
        assert_eq!(config.search.min_query_len, 2);
        assert_eq!(config.search.max_results, 5);
        assert_eq!(config.search.fuzzy_floor, 2);
        assert_eq!(config.search.fuzzy_divisor, 3);
        assert_eq!(config.ui.debounce, Duration::from_millis(300));
    }
}
