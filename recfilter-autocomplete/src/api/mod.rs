//! HTTP API handlers for recfilter-autocomplete

pub mod assets;
pub mod autocomplete;
pub mod health;

pub use assets::serve_recording_filter_js;
pub use autocomplete::autocomplete_songs;
pub use health::health_routes;
