//! Catalog snapshot providers.
//!
//! Implementations supply one-shot catalog snapshots through different
//! backends (bundled fixture data, mocks for testing). The surrounding
//! application owns the real network transport; Torii only consumes the
//! decoded shape.

use async_trait::async_trait;

use crate::CatalogError;
use crate::catalog::CatalogEntry;

pub mod fixture;

pub use fixture::FixtureProvider;

/// Trait for catalog snapshot providers.
///
/// A provider is consulted exactly once, at startup. The fetch is
/// best-effort: consumers log failures and continue with an empty cache
/// rather than surfacing an error to the user.
#[async_trait]
pub trait CatalogProvider: Send + Sync + std::fmt::Debug {
    /// Fetch a full catalog snapshot.
    ///
    /// # Errors
    /// - `CatalogError::FetchFailed` - Provider could not produce a snapshot
    /// - `CatalogError::MalformedSnapshot` - Snapshot data failed to decode
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, CatalogError>;
}
