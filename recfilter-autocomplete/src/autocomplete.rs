//! Song title autocomplete
//!
//! Fetches an artist's songs from the catalog and keeps those whose title
//! contains the query, ignoring case. Provider order is preserved and no
//! result cap is applied.

use recfilter_common::logging::LOG_TARGET;
use recfilter_common::{ArtistId, CatalogProvider, Result, Song};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One suggestion for the autocomplete widget
///
/// Both fields carry the song title: `value` is inserted into the input,
/// `label` is displayed in the suggestion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub value: String,
    pub label: String,
}

impl Match {
    fn from_title(title: &str) -> Self {
        Self {
            value: title.to_string(),
            label: title.to_string(),
        }
    }
}

/// Keep songs whose title contains `query` (case-insensitive)
///
/// An empty query matches every song.
pub fn filter_songs(songs: &[Song], query: &str) -> Vec<Match> {
    let needle = query.to_lowercase();

    songs
        .iter()
        .filter(|song| song.title.to_lowercase().contains(&needle))
        .map(|song| Match::from_title(&song.title))
        .collect()
}

/// Look up an artist's songs and filter them by `query`
///
/// An unknown artist yields an empty list. Catalog failures propagate.
pub async fn autocomplete(
    catalog: &dyn CatalogProvider,
    artist_id: &ArtistId,
    query: &str,
) -> Result<Vec<Match>> {
    info!(target: LOG_TARGET, "Autocomplete callback triggered for artist ID: {}", artist_id);
    info!(target: LOG_TARGET, "Query: {}", query);

    let songs = catalog.songs_by_artist(artist_id).await?;
    let matches = filter_songs(&songs, query);

    let titles: Vec<&str> = matches.iter().map(|m| m.value.as_str()).collect();
    info!(target: LOG_TARGET, "Filtered songs: {:?}", titles);

    Ok(matches)
}
