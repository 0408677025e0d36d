//! Catalog data shapes shared across Torii components.
//!
//! These types mirror the snapshot the surrounding application supplies:
//! titled works with ordered seasons, each holding ordered episodes.
//! Entries are immutable once cached by the search index.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a catalog entry within one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimeId(String);

impl AnimeId {
    /// Creates an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnimeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AnimeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for AnimeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One titled work with its season/episode structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: AnimeId,
    pub title: String,
    pub image_url: String,
    pub seasons: Vec<Season>,
}

/// A season within a catalog entry.
///
/// Snapshot order is authoritative; `number` is display metadata and plays
/// no part in navigation-target derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub number: u32,
    pub episodes: Vec<Episode>,
}

/// A single episode within a season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub number: u32,
}

/// The (anime, season, episode) triple used to jump straight into playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub anime_id: AnimeId,
    pub season_number: u32,
    pub episode_number: u32,
}

impl CatalogEntry {
    /// Derives the navigation target for this entry: its first season's
    /// first episode, taken in snapshot order rather than by number.
    ///
    /// Returns `None` for entries with no seasons or an episode-less first
    /// season; such entries are not navigable and search skips them.
    pub fn first_target(&self) -> Option<NavigationTarget> {
        let season = self.seasons.first()?;
        let episode = season.episodes.first()?;
        Some(NavigationTarget {
            anime_id: self.id.clone(),
            season_number: season.number,
            episode_number: episode.number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(seasons: Vec<Season>) -> CatalogEntry {
        CatalogEntry {
            id: AnimeId::from("test-entry"),
            title: "Test Entry".to_string(),
            image_url: "/static/covers/test.jpg".to_string(),
            seasons,
        }
    }

    #[test]
    fn first_target_uses_snapshot_order_not_numbers() {
        // Seasons arrive out of numeric order; the first listed one wins.
        let entry = entry(vec![
            Season {
                number: 3,
                episodes: vec![Episode { number: 7 }, Episode { number: 1 }],
            },
            Season {
                number: 1,
                episodes: vec![Episode { number: 1 }],
            },
        ]);

        let target = entry.first_target().unwrap();
        assert_eq!(target.season_number, 3);
        assert_eq!(target.episode_number, 7);
        assert_eq!(target.anime_id, AnimeId::from("test-entry"));
    }

    #[test]
    fn first_target_missing_for_empty_entry() {
        assert!(entry(Vec::new()).first_target().is_none());
    }

    #[test]
    fn first_target_missing_when_first_season_has_no_episodes() {
        // A populated second season does not rescue an empty first one.
        let entry = entry(vec![
            Season {
                number: 1,
                episodes: Vec::new(),
            },
            Season {
                number: 2,
                episodes: vec![Episode { number: 1 }],
            },
        ]);
        assert!(entry.first_target().is_none());
    }

    #[test]
    fn decodes_wire_shape() {
        let json = r#"{
            "id": "naruto",
            "title": "Naruto",
            "image_url": "/static/covers/naruto.jpg",
            "seasons": [
                { "number": 1, "episodes": [{ "number": 1 }, { "number": 2 }] }
            ]
        }"#;

        let entry: CatalogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id.as_str(), "naruto");
        assert_eq!(entry.title, "Naruto");
        assert_eq!(entry.seasons.len(), 1);
        assert_eq!(entry.seasons[0].episodes.len(), 2);
    }

    #[test]
    fn anime_id_display_matches_wire_form() {
        let id = AnimeId::new("one-piece");
        assert_eq!(id.to_string(), "one-piece");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"one-piece\"");
    }
}
