//! Word lookup cache
//!
//! Responses of `/nlp/word` keyed by `"{word}.{pos}"`. Without a configured
//! capacity or TTL the cache is unbounded and entries never expire.
//!
//! Uses the moka crate for thread-safe, async-compatible caching.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::Serialize;

use lingo_core::CacheConfig;
use lingo_lexicon::WordLookup;

/// Cache for word lookup responses
#[derive(Clone)]
pub struct WordCache {
    cache: Cache<String, Arc<WordLookup>>,
    stats: Arc<CacheStats>,
}

impl WordCache {
    /// Unbounded cache without expiry
    pub fn new() -> Self {
        Self::with_config(&CacheConfig::default())
    }

    pub fn with_config(config: &CacheConfig) -> Self {
        let mut builder = Cache::<String, Arc<WordLookup>>::builder();
        if let Some(capacity) = config.word_max_capacity {
            builder = builder.max_capacity(capacity);
        }
        if let Some(ttl) = config.word_ttl_secs {
            builder = builder.time_to_live(Duration::from_secs(ttl));
        }

        Self {
            cache: builder.build(),
            stats: Arc::new(CacheStats::default()),
        }
    }

    /// Cache key for a lookup; an absent part of speech is keyed as empty
    pub fn key(word: &str, pos: Option<&str>) -> String {
        format!("{word}.{}", pos.unwrap_or_default())
    }

    pub async fn get(&self, key: &str) -> Option<Arc<WordLookup>> {
        let result = self.cache.get(key).await;

        if result.is_some() {
            self.stats.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.stats.misses.fetch_add(1, Ordering::Relaxed);
        }

        result
    }

    pub async fn put(&self, key: String, lookup: Arc<WordLookup>) {
        self.cache.insert(key, lookup).await;
    }

    /// Number of cached entries after pending maintenance has run
    pub async fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }

    pub fn stats(&self) -> CacheStatsReport {
        let hits = self.stats.hits.load(Ordering::Relaxed);
        let misses = self.stats.misses.load(Ordering::Relaxed);
        let total = hits + misses;

        CacheStatsReport {
            hits,
            misses,
            hit_rate: if total > 0 {
                hits as f64 / total as f64
            } else {
                0.0
            },
        }
    }
}

impl Default for WordCache {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Snapshot of cache statistics
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsReport {
    pub hits: u64,
    pub misses: u64,
    /// Hit rate (0.0 - 1.0)
    pub hit_rate: f64,
}
