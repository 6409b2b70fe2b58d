//! Configuration loading and resolution
//!
//! Each setting is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing TOML file is not an error; a malformed one is.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use crate::{Error, Result};

/// Directory name used under the platform config and data directories
pub const APP_DIR_NAME: &str = "recording-filter";

pub const ENV_CATALOG: &str = "RECFILTER_CATALOG";
pub const ENV_BIND: &str = "RECFILTER_BIND";
pub const ENV_LOG_LEVEL: &str = "RECFILTER_LOG_LEVEL";

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5740";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Logging section of the TOML file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// On-disk TOML configuration; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bind_address: Option<String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Fallback values used when nothing else supplies a setting
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub catalog_path: PathBuf,
    pub bind_address: String,
    pub log_level: String,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        let data_dir = dirs::data_local_dir()
            .map(|d| d.join(APP_DIR_NAME))
            .unwrap_or_else(|| PathBuf::from("./recording_filter_data"));

        Self {
            catalog_path: data_dir.join("catalog.db"),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Where the TOML tier came from
///
/// Resolution runs before the tracing subscriber exists, so the caller logs
/// this once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from this file
    File(PathBuf),
    /// Default location had no file
    Missing(PathBuf),
    /// Platform has no config directory
    NoConfigDir,
}

/// Fully resolved service settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub catalog_path: PathBuf,
    pub bind_address: SocketAddr,
    pub log_level: String,
    pub source: ConfigSource,
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}

/// Default TOML location: `<config_dir>/recording-filter/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR_NAME).join("config.toml"))
}

/// Read and parse a TOML config file
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
}

/// Resolves [`ServiceConfig`] from all configuration tiers
pub struct ConfigResolver {
    overrides: ConfigOverrides,
    defaults: CompiledDefaults,
}

impl ConfigResolver {
    pub fn new(overrides: ConfigOverrides) -> Self {
        Self {
            overrides,
            defaults: CompiledDefaults::for_current_platform(),
        }
    }

    pub fn resolve(&self) -> Result<ServiceConfig> {
        let (toml_config, source) = self.load_toml()?;

        let catalog_path = self
            .overrides
            .catalog_path
            .clone()
            .or_else(|| env_var(ENV_CATALOG).map(PathBuf::from))
            .or_else(|| toml_config.catalog_path.clone())
            .unwrap_or_else(|| self.defaults.catalog_path.clone());

        let bind = self
            .overrides
            .bind_address
            .clone()
            .or_else(|| env_var(ENV_BIND))
            .or_else(|| toml_config.bind_address.clone())
            .unwrap_or_else(|| self.defaults.bind_address.clone());

        let bind_address: SocketAddr = bind
            .parse()
            .map_err(|e| Error::Config(format!("Invalid bind address '{}': {}", bind, e)))?;

        let log_level = self
            .overrides
            .log_level
            .clone()
            .or_else(|| env_var(ENV_LOG_LEVEL))
            .unwrap_or(toml_config.logging.level);

        Ok(ServiceConfig {
            catalog_path,
            bind_address,
            log_level,
            source,
        })
    }

    /// An explicitly requested file must exist; the default location may not.
    fn load_toml(&self) -> Result<(TomlConfig, ConfigSource)> {
        if let Some(path) = &self.overrides.config_file {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Ok((load_toml_config(path)?, ConfigSource::File(path.clone())));
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                Ok((load_toml_config(&path)?, ConfigSource::File(path)))
            }
            Some(path) => Ok((TomlConfig::default(), ConfigSource::Missing(path))),
            None => Ok((TomlConfig::default(), ConfigSource::NoConfigDir)),
        }
    }
}

/// Non-empty environment variable value
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
