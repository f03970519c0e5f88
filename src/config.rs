// Application configuration.
// Defaults match the public Picsum API; a few environment variables override them.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::cache;
use crate::error::{FeedError, Result};
use crate::picsum::{DEFAULT_ENDPOINT, ImageSource};

/// Number of photos kept from the listing.
pub const DEFAULT_LIMIT: usize = 10;

/// Store key holding the cached photo list.
pub const DEFAULT_CACHE_KEY: &str = "users";

/// Default log filter when `SNAPFEED_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "snapfeed=info";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Photo listing endpoint.
    pub endpoint: String,
    /// Maximum number of photos published and cached.
    pub limit: usize,
    /// Key of the cached photo list in the store.
    pub cache_key: String,
    /// Root for the store and the log file.
    pub cache_dir: PathBuf,
    /// How image URLs are built.
    pub image_source: ImageSource,
    /// Tracing filter directive.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            limit: DEFAULT_LIMIT,
            cache_key: DEFAULT_CACHE_KEY.to_string(),
            cache_dir: cache::cache_dir().unwrap_or_else(|| PathBuf::from(".snapfeed")),
            image_source: ImageSource::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Build the configuration from defaults plus `SNAPFEED_*` overrides.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(endpoint) = lookup("SNAPFEED_ENDPOINT") {
            if endpoint.trim().is_empty() {
                return Err(FeedError::Config("SNAPFEED_ENDPOINT is empty".to_string()));
            }
            config.endpoint = endpoint;
        }
        if let Some(dir) = lookup("SNAPFEED_CACHE_DIR") {
            config.cache_dir = PathBuf::from(dir);
        }
        if let Some(source) = lookup("SNAPFEED_IMAGES") {
            config.image_source = source.parse()?;
        }
        if let Some(filter) = lookup("SNAPFEED_LOG") {
            EnvFilter::try_new(&filter).map_err(|e| {
                FeedError::Config(format!("invalid SNAPFEED_LOG '{}': {}", filter, e))
            })?;
            config.log_filter = filter;
        }

        Ok(config)
    }

    /// Directory of the key-value store.
    pub fn store_dir(&self) -> PathBuf {
        cache::store_dir(&self.cache_dir)
    }

    /// Path of the log file.
    pub fn log_path(&self) -> PathBuf {
        cache::log_path(&self.cache_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.endpoint, "https://picsum.photos/v2/list");
        assert_eq!(config.limit, 10);
        assert_eq!(config.cache_key, "users");
        assert_eq!(config.image_source, ImageSource::DownloadUrl);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("SNAPFEED_ENDPOINT", "http://localhost:9000/list"),
            ("SNAPFEED_CACHE_DIR", "/tmp/feed"),
            ("SNAPFEED_IMAGES", "blurred"),
            ("SNAPFEED_LOG", "snapfeed=debug"),
        ]))
        .unwrap();

        assert_eq!(config.endpoint, "http://localhost:9000/list");
        assert_eq!(config.store_dir(), PathBuf::from("/tmp/feed/store"));
        assert_eq!(config.log_path(), PathBuf::from("/tmp/feed/snapfeed.log"));
        assert_eq!(config.image_source, ImageSource::BLURRED_DEFAULT);
        assert_eq!(config.log_filter, "snapfeed=debug");
    }

    #[test]
    fn test_invalid_overrides() {
        assert!(Config::from_lookup(lookup(&[("SNAPFEED_IMAGES", "sepia")])).is_err());
        assert!(Config::from_lookup(lookup(&[("SNAPFEED_ENDPOINT", " ")])).is_err());
        assert!(matches!(
            Config::from_lookup(lookup(&[("SNAPFEED_LOG", "snapfeed=loud")])),
            Err(FeedError::Config(_))
        ));
    }
}
