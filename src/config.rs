use crate::search::SearchConfig;
use crate::similarity::SimilarityConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Fuzzy text index configuration
    #[serde(default)]
    pub search: SearchConfig,

    /// Recommender configuration
    #[serde(default)]
    pub similarity: SimilarityConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Config {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("BOOKDIR_CONFIG").unwrap_or_else(|_| "config/bookdir.toml".to_string());
        Self::load_from(&config_path)
    }

    /// Load configuration, layering `path` (if it exists) over the defaults
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            // Start with default values
            .add_source(config::File::from_str(
                include_str!("../config/default.toml"),
                config::FileFormat::Toml,
            ))
            // Override with config file if it exists
            .add_source(config::File::with_name(path).required(false))
            // Override with environment variables (prefix: BOOKDIR_)
            .add_source(
                config::Environment::with_prefix("BOOKDIR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path of the normalized JSON catalog
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/books.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_match_code_defaults() {
        let config = Config::load_from("config/does-not-exist").unwrap();
        let defaults = Config::default();

        assert_eq!(config.catalog.path, defaults.catalog.path);
        assert_eq!(config.search, defaults.search);
        assert_eq!(config.similarity, defaults.similarity);
        assert_eq!(config.observability.log_level, "info");
        assert!(!config.observability.json_logs);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("override.toml");
        std::fs::write(
            &path,
            "[search]\nmin_query_chars = 3\n\n[similarity]\ndefault_limit = 4\n",
        )
        .unwrap();

        let config = Config::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.search.min_query_chars, 3);
        assert_eq!(config.search.max_edit_distance, 2);
        assert_eq!(config.similarity.default_limit, 4);
    }
}
