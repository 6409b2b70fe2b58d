//! Client script serving
//!
//! Serves the behavior that re-attaches autocomplete to song name inputs
//! inserted after page load. Its logic is mirrored by [`crate::rebind`].

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

const RECORDING_FILTER_JS: &str = include_str!("../ui/recording_filter.js");

/// GET /js/recording_filter.js
pub async fn serve_recording_filter_js() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/javascript")],
        RECORDING_FILTER_JS,
    )
        .into_response()
}
