//! recfilter-autocomplete - song title autocomplete service
//!
//! Serves `GET /autocomplete/{artist_id}?q=...` backed by a read-only SQLite
//! song catalog, plus the client re-binder script and a health endpoint.

use anyhow::Result;
use clap::Parser;
use recfilter_common::config::{ConfigOverrides, ConfigResolver, ConfigSource};
use recfilter_common::logging::init_tracing;
use recfilter_common::SqliteCatalog;
use recfilter_autocomplete::{build_router, AppState};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Song title autocomplete service
///
/// Command-line values override environment variables and the TOML file.
#[derive(Debug, Parser)]
#[command(name = "recfilter-autocomplete", version, about)]
struct Args {
    /// TOML config file (default: <config_dir>/recording-filter/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Song catalog SQLite database
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:5740
    #[arg(long)]
    bind: Option<String>,

    /// Log level or filter directives (RUST_LOG takes precedence)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = ConfigResolver::new(ConfigOverrides {
        config_file: args.config,
        catalog_path: args.catalog,
        bind_address: args.bind,
        log_level: args.log_level,
    })
    .resolve()?;

    init_tracing(&config.log_level)?;

    info!(
        "Starting recfilter-autocomplete v{}",
        env!("CARGO_PKG_VERSION")
    );
    match &config.source {
        ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
        ConfigSource::Missing(path) => {
            warn!("No config file at {}, using defaults", path.display())
        }
        ConfigSource::NoConfigDir => {
            warn!("Could not determine config directory, using defaults")
        }
    }
    info!("Catalog path: {}", config.catalog_path.display());

    let catalog = match SqliteCatalog::open_readonly(&config.catalog_path).await {
        Ok(catalog) => {
            info!("✓ Connected to catalog (read-only)");
            catalog
        }
        Err(e) => {
            error!("Failed to open catalog: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::new(Arc::new(catalog));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!("recfilter-autocomplete listening on http://{}", config.bind_address);
    info!("Health check: http://{}/health", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
