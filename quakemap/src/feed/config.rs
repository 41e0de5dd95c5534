use std::path::PathBuf;

use super::{EARTHQUAKE_FEED_URL, TECTONIC_PLATES_FEED_URL};

const EARTHQUAKE_FEED_VAR: &str = "QUAKEMAP_EARTHQUAKE_FEED";
const PLATES_FEED_VAR: &str = "QUAKEMAP_PLATES_FEED";
const TILE_CACHE_VAR: &str = "QUAKEMAP_TILE_CACHE";
const DEFAULT_TILE_CACHE: &str = ".tile_cache";

/// Where the map takes its data from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Url of the earthquake feed.
    pub earthquake_url: String,
    /// Url of the tectonic plate boundaries feed.
    pub plates_url: String,
    /// Folder for downloaded tiles. `None` disables the cache.
    pub tile_cache: Option<PathBuf>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            earthquake_url: EARTHQUAKE_FEED_URL.to_owned(),
            plates_url: TECTONIC_PLATES_FEED_URL.to_owned(),
            tile_cache: Some(PathBuf::from(DEFAULT_TILE_CACHE)),
        }
    }
}

impl FeedConfig {
    /// Default configuration with overrides from the `QUAKEMAP_EARTHQUAKE_FEED`,
    /// `QUAKEMAP_PLATES_FEED` and `QUAKEMAP_TILE_CACHE` environment variables. An empty
    /// `QUAKEMAP_TILE_CACHE` disables the tile cache.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(EARTHQUAKE_FEED_VAR) {
            config.earthquake_url = url;
        }
        if let Some(url) = lookup(PLATES_FEED_VAR) {
            config.plates_url = url;
        }
        if let Some(folder) = lookup(TILE_CACHE_VAR) {
            config.tile_cache = (!folder.is_empty()).then(|| PathBuf::from(folder));
        }

        config
    }
}
