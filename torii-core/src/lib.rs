//! Torii Core - Catalog domain model and acquisition
//!
//! Provides the catalog data shapes shared by every Torii component, the
//! provider interface used to fetch catalog snapshots, centralized
//! configuration, and tracing setup.

pub mod catalog;
pub mod config;
pub mod providers;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use catalog::{AnimeId, CatalogEntry, Episode, NavigationTarget, Season};
pub use config::{SearchConfig, ToriiConfig, UiConfig};
pub use providers::{CatalogProvider, FixtureProvider};

/// Errors that can occur while acquiring a catalog snapshot.
///
/// These never cross the search boundary: a failed fetch is logged and the
/// catalog cache simply stays empty, degrading search to no results.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Provider could not produce a snapshot.
    #[error("Catalog fetch failed: {reason}")]
    FetchFailed {
        /// The reason the fetch failed
        reason: String,
    },

    /// Snapshot data did not decode into the catalog shape.
    #[error("Malformed catalog snapshot: {reason}")]
    MalformedSnapshot {
        /// The reason decoding failed
        reason: String,
    },
}

/// Convenience type alias for Results with CatalogError.
pub type Result<T> = std::result::Result<T, CatalogError>;
