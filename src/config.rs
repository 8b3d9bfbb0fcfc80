//! Configuration management for RecipeTUI
//!
//! Handles config file loading/saving and service settings.
//! Config is stored at ~/.config/recipetui/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::api::{mealdb, MealDbClient, YoutubeClient};
use crate::favorites::FavoritesStore;
use crate::video::VideoResolver;

const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Recipe API base URL (defaults to the public TheMealDB endpoint)
    pub api_base_url: Option<String>,
    /// Look up tutorial videos on YouTube (off by default)
    pub video_lookup: Option<bool>,
    /// YouTube Data API key
    pub youtube_api_key: Option<String>,
    /// YouTube API base URL override
    pub youtube_base_url: Option<String>,
    /// Favorites file location
    pub favorites_path: Option<PathBuf>,
    /// tracing filter directive, e.g. "debug" or "recipetui=trace"
    pub log_level: Option<String>,
}

impl Config {
    /// Get config file path (~/.config/recipetui/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("recipetui").join("config.toml"))
    }

    /// Load config from the default path, or return default if not found
    pub fn load() -> Self {
        Self::path().map(|p| Self::load_from(&p)).unwrap_or_default()
    }

    /// Load config from a specific file, or return default if missing or invalid
    pub fn load_from(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => return Self::default(),
        };

        match toml::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "invalid config, using defaults");
                Self::default()
            }
        }
    }

    /// Load from `--config` if given, else the default location
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::load_from(p),
            None => Self::load(),
        }
    }

    /// YouTube API key with fallback chain:
    /// 1. Environment variable YOUTUBE_API_KEY
    /// 2. Key from config file
    pub fn youtube_api_key(&self) -> Option<String> {
        std::env::var("YOUTUBE_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.youtube_api_key.clone())
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(mealdb::DEFAULT_BASE_URL)
    }

    pub fn recipe_client(&self) -> MealDbClient {
        MealDbClient::with_base_url(self.api_base_url())
    }

    /// Active resolver only when lookups are enabled and a key is available
    pub fn video_resolver(&self) -> VideoResolver {
        if !self.video_lookup.unwrap_or(false) {
            return VideoResolver::Disabled;
        }

        match self.youtube_api_key() {
            Some(key) => {
                let client = match &self.youtube_base_url {
                    Some(url) => YoutubeClient::with_base_url(key, url.clone()),
                    None => YoutubeClient::new(key),
                };
                VideoResolver::active(client)
            }
            None => {
                tracing::warn!("video_lookup enabled but no YouTube API key set; lookups disabled");
                VideoResolver::Disabled
            }
        }
    }

    pub fn favorites_store(&self) -> FavoritesStore {
        let path = self
            .favorites_path
            .clone()
            .or_else(FavoritesStore::default_path)
            .unwrap_or_else(|| PathBuf::from(crate::favorites::FILE_NAME));
        FavoritesStore::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_base_url.is_none());
        assert!(config.favorites_path.is_none());
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.api_base_url(), mealdb::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_video_resolver_disabled_by_default() {
        let config = Config {
            youtube_api_key: Some("key".into()),
            ..Default::default()
        };
        assert!(!config.video_resolver().is_active());
    }

    #[test]
    fn test_parse_toml() {
        let config: Config = toml::from_str(
            r#"
            api_base_url = "http://localhost:8080"
            video_lookup = true
            favorites_path = "/tmp/favs.json"
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.api_base_url(), "http://localhost:8080");
        assert_eq!(config.video_lookup, Some(true));
        assert_eq!(config.favorites_store().path(), Path::new("/tmp/favs.json"));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let config = Config::load_from(Path::new("/nonexistent/recipetui/config.toml"));
        assert_eq!(config, Config::default());
    }
}
