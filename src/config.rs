use std::env;
use std::path::{Path, PathBuf};

use config::{Config as ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::error::Result;

/// Config file read when no path is given and `SUSHI_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "sushi.toml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Catalog document (`sushi_data.json`).
    pub catalog_path: PathBuf,

    /// Where the cart and already-have marks are kept between runs.
    pub session_path: PathBuf,

    /// Page that opens shared event menus.
    pub share_base_url: String,

    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("data/sushi_data.json"),
            session_path: PathBuf::from("sushi_session.json"),
            share_base_url: "http://localhost:8000/".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (SUSHI__CATALOG_PATH, SUSHI__LOG_LEVEL, ...)
    /// 2. Config file given by path, `SUSHI_CONFIG`, or `sushi.toml`
    /// 3. Hardcoded defaults
    ///
    /// A missing config file is not an error.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let defaults = AppConfig::default();
        let mut builder = ConfigBuilder::builder()
            .set_default("catalog_path", defaults.catalog_path.to_string_lossy().to_string())?
            .set_default("session_path", defaults.session_path.to_string_lossy().to_string())?
            .set_default("share_base_url", defaults.share_base_url)?
            .set_default("log_level", defaults.log_level)?;

        let file_path = config_path
            .map(Path::to_path_buf)
            .or_else(|| env::var("SUSHI_CONFIG").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if file_path.exists() {
            builder = builder.add_source(File::from(file_path.as_path()));
        }

        builder = builder.add_source(
            Environment::with_prefix("SUSHI")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }
}
