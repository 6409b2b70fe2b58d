//! recfilter-autocomplete library - song title autocomplete service
//!
//! Answers `GET /autocomplete/{artist_id}?q=...` with the artist's songs whose
//! titles contain the query, and serves the client script that re-attaches
//! autocomplete widgets to dynamically inserted song name inputs.

use axum::Router;
use chrono::{DateTime, Utc};
use recfilter_common::CatalogProvider;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod autocomplete;
pub mod error;
pub mod rebind;

pub use crate::error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Song catalog (read-only)
    pub catalog: Arc<dyn CatalogProvider>,
    /// Service startup timestamp, reported by the health endpoint
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self {
            catalog,
            started_at: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/autocomplete/:artist_id", get(api::autocomplete_songs))
        .route("/js/recording_filter.js", get(api::serve_recording_filter_js))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
