// Feed loader.
// Reads the cached photo list or fetches and caches it, collapsing every failure.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::cache::KeyValueStore;
use crate::error::{FeedError, Result};
use crate::picsum::{PhotoRecord, PicsumClient};

/// Where a published list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Cache { cached_at: Option<DateTime<Utc>> },
    Network,
}

/// A list handed to the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub photos: Vec<PhotoRecord>,
    pub origin: Origin,
}

/// Result of one loader run. Both fields may be set when the list was
/// published before a later step failed.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub published: Option<Published>,
    pub failure: Option<FeedError>,
}

impl LoadOutcome {
    fn publish(&mut self, photos: Vec<PhotoRecord>, origin: Origin) {
        self.published = Some(Published { photos, origin });
    }
}

/// Runs the cache-or-fetch sequence once.
#[derive(Debug, Clone)]
pub struct FeedLoader {
    client: PicsumClient,
    store: KeyValueStore,
    cache_key: String,
    limit: usize,
}

impl FeedLoader {
    pub fn new(
        client: PicsumClient,
        store: KeyValueStore,
        cache_key: impl Into<String>,
        limit: usize,
    ) -> Self {
        Self {
            client,
            store,
            cache_key: cache_key.into(),
            limit,
        }
    }

    /// Run the sequence. Never fails: errors are logged and reported in the
    /// outcome, never retried.
    pub async fn run(&self) -> LoadOutcome {
        let mut outcome = LoadOutcome::default();
        if let Err(e) = self.load(&mut outcome).await {
            warn!(error = %e, "loading failed");
            outcome.failure = Some(e);
        }
        outcome
    }

    async fn load(&self, outcome: &mut LoadOutcome) -> Result<()> {
        let cached = self
            .store
            .get_item(&self.cache_key)?
            .filter(|raw| !raw.is_empty());

        if let Some(raw) = cached {
            let photos: Vec<PhotoRecord> = serde_json::from_str(&raw)?;
            info!(count = photos.len(), "photos loaded from cache");
            let cached_at = self.store.modified_at(&self.cache_key);
            outcome.publish(photos, Origin::Cache { cached_at });
            return Ok(());
        }

        let mut photos = self.client.list_photos().await?;
        photos.truncate(self.limit);
        info!(count = photos.len(), endpoint = self.client.endpoint(), "photos fetched");

        let raw = serde_json::to_string(&photos)?;
        outcome.publish(photos, Origin::Network);
        self.store.set_item(&self.cache_key, &raw)?;
        Ok(())
    }
}
