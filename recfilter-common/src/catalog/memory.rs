//! In-memory catalog
//!
//! Fixed song lists keyed by artist. Used by tests and local demos where no
//! catalog database is available.

use async_trait::async_trait;
use std::collections::HashMap;

use super::{ArtistId, CatalogProvider, Song};
use crate::Result;

/// Catalog held entirely in memory, preserving insertion order per artist
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    songs: HashMap<ArtistId, Vec<Song>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append songs to an artist's list (builder style)
    pub fn with_songs(mut self, artist_id: impl Into<ArtistId>, songs: Vec<Song>) -> Self {
        self.insert(artist_id, songs);
        self
    }

    /// Append songs to an artist's list
    pub fn insert(&mut self, artist_id: impl Into<ArtistId>, songs: Vec<Song>) {
        self.songs.entry(artist_id.into()).or_default().extend(songs);
    }
}

#[async_trait]
impl CatalogProvider for InMemoryCatalog {
    async fn songs_by_artist(&self, artist_id: &ArtistId) -> Result<Vec<Song>> {
        Ok(self.songs.get(artist_id).cloned().unwrap_or_default())
    }
}
