//! Fixture provider implementation for development and testing.

use async_trait::async_trait;

use super::CatalogProvider;
use crate::CatalogError;
use crate::catalog::CatalogEntry;

/// Bundled catalog snapshot in the wire shape the site backend serves.
const BUNDLED_CATALOG: &str = include_str!("fixture_catalog.json");

/// Provider decoding catalog snapshots from JSON fixture data.
///
/// Fills the role a network-backed provider has in the full application:
/// realistic data for UI development and integration tests without any
/// transport. Serves a bundled anime catalog by default; callers can
/// substitute their own snapshot JSON.
#[derive(Debug)]
pub struct FixtureProvider {
    raw: String,
}

impl FixtureProvider {
    /// Creates a provider serving the bundled demo catalog.
    pub fn new() -> Self {
        Self {
            raw: BUNDLED_CATALOG.to_string(),
        }
    }

    /// Creates a provider serving caller-supplied snapshot JSON.
    pub fn from_json(json: impl Into<String>) -> Self {
        Self { raw: json.into() }
    }
}

impl Default for FixtureProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogProvider for FixtureProvider {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        serde_json::from_str(&self.raw).map_err(|error| CatalogError::MalformedSnapshot {
            reason: error.to_string(),
        })
    }
}
