//! Song catalog access
//!
//! The catalog is owned by an external system; this crate only reads it.
//! Handlers depend on [`CatalogProvider`] so the backing store can be swapped
//! (SQLite in production, in-memory in tests).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Result;

mod memory;
mod sqlite;

pub use memory::InMemoryCatalog;
pub use sqlite::{SqliteCatalog, CATALOG_SCHEMA};

/// Opaque artist identifier
///
/// Integer ids from upstream catalogs are carried as their decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(String);

impl ArtistId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArtistId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ArtistId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for ArtistId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

/// A song in an artist's catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Unique within the artist's catalog
    pub id: i64,
    /// Display title, used for matching
    pub title: String,
}

impl Song {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// Source of songs by artist
///
/// Implementations return songs in their own iteration order; callers
/// preserve it. An unknown artist yields an empty list, never an error.
/// Errors are reserved for the catalog itself being unreachable or broken.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn songs_by_artist(&self, artist_id: &ArtistId) -> Result<Vec<Song>>;
}
