//! # Recording Filter Common Library
//!
//! Shared code for the recording filter services:
//! - Catalog provider interface and storage backends
//! - Configuration loading
//! - Logging setup
//! - Error types

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;

pub use catalog::{ArtistId, CatalogProvider, InMemoryCatalog, Song, SqliteCatalog};
pub use error::{Error, Result};
