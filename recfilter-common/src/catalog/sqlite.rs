//! SQLite catalog backend
//!
//! Reads songs from a catalog database exported by the content system.
//! All connections are read-only.

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::debug;

use super::{ArtistId, CatalogProvider, Song};
use crate::{Error, Result};

/// Schema the catalog database is expected to provide
///
/// `artist_id` is TEXT so integer and string identifiers compare the same way.
pub const CATALOG_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS songs (
    song_id INTEGER PRIMARY KEY,
    artist_id TEXT NOT NULL,
    title TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_songs_artist_id ON songs(artist_id);
";

/// Catalog backed by a read-only SQLite pool
#[derive(Debug, Clone)]
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    /// Open the catalog database in read-only mode
    pub async fn open_readonly(db_path: &Path) -> Result<Self> {
        if !db_path.exists() {
            return Err(Error::Catalog(format!(
                "Catalog database not found: {}",
                db_path.display()
            )));
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .read_only(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl CatalogProvider for SqliteCatalog {
    async fn songs_by_artist(&self, artist_id: &ArtistId) -> Result<Vec<Song>> {
        let rows: Vec<(i64, String)> = sqlx::query_as(
            "SELECT song_id, title FROM songs WHERE artist_id = ? ORDER BY song_id",
        )
        .bind(artist_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        debug!("Catalog returned {} songs for artist {}", rows.len(), artist_id);

        Ok(rows
            .into_iter()
            .map(|(id, title)| Song { id, title })
            .collect())
    }
}
