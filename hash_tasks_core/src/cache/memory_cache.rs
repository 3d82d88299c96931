//! Memory-based shared cache implementation
//!
//! In-process cache with per-entry TTL, an entry-count cap with
//! oldest-first eviction, and a background sweep for expired entries.

use crate::cache::traits::SharedCache;
use crate::cache::{CacheEntry, CacheStats};
use crate::error::Result;
use crate::tasks::TaskResult;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::sync::RwLock;
use tokio::time::interval;

/// Configuration for the memory cache
#[derive(Debug, Clone)]
pub struct MemoryCacheConfig {
    /// Maximum number of entries to keep
    pub max_entries: Option<usize>,
    /// Interval for cleanup of expired entries
    pub cleanup_interval: Duration,
}

impl Default for MemoryCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: Some(10_000),
            cleanup_interval: Duration::from_secs(300),
        }
    }
}

/// Memory-based cache for storing task results
///
/// Must be created inside a tokio runtime; construction spawns the
/// background cleanup task.
pub struct MemoryCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    stats: Arc<RwLock<CacheStats>>,
    config: MemoryCacheConfig,
    shutdown: Arc<RwLock<bool>>,
}

impl MemoryCache {
    /// Create a new memory cache with default configuration
    pub fn new() -> Self {
        Self::with_config(MemoryCacheConfig::default())
    }

    /// Create a new memory cache with custom configuration
    pub fn with_config(config: MemoryCacheConfig) -> Self {
        let cache = Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            stats: Arc::new(RwLock::new(CacheStats::default())),
            config: config.clone(),
            shutdown: Arc::new(RwLock::new(false)),
        };

        // Start background cleanup task
        let entries = cache.entries.clone();
        let stats = cache.stats.clone();
        let shutdown = cache.shutdown.clone();
        let cleanup_interval = config.cleanup_interval;

        tokio::spawn(async move {
            let mut ticker = interval(cleanup_interval);
            loop {
                ticker.tick().await;

                if *shutdown.read().await {
                    break;
                }

                let mut entries = entries.write().await;
                let mut stats = stats.write().await;
                let now = SystemTime::now();
                let before = entries.len();

                entries.retain(|_, entry| now <= entry.expires_at);

                let removed = before - entries.len();
                if removed > 0 {
                    stats.entry_count = entries.len();
                    stats.expired_count += removed as u64;
                    log::debug!("Expired {removed} cache entries during cleanup sweep");
                }
            }
        });

        cache
    }

    /// Read an entry, removing it if expired
    ///
    /// Not part of the `SharedCache` contract; the handlers never read.
    /// Exposed for the surrounding system and for tests.
    pub async fn get(&self, key: &str) -> Option<TaskResult> {
        let mut entries = self.entries.write().await;
        let mut stats = self.stats.write().await;

        let expired = match entries.get(key) {
            Some(entry) => SystemTime::now() > entry.expires_at,
            None => return None,
        };

        if expired {
            entries.remove(key);
            stats.entry_count = entries.len();
            stats.expired_count += 1;
            return None;
        }

        entries.get(key).map(|entry| entry.result.clone())
    }

    /// Current number of stored entries
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the cache holds no entries
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Snapshot of cache statistics
    pub async fn stats(&self) -> CacheStats {
        self.stats.read().await.clone()
    }

    /// Evict oldest entries until under the configured entry cap
    fn evict_if_needed(&self, entries: &mut HashMap<String, CacheEntry>) {
        if let Some(max) = self.config.max_entries {
            while entries.len() >= max {
                if let Some(oldest_key) = entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.created_at)
                    .map(|(k, _)| k.clone())
                {
                    entries.remove(&oldest_key);
                }
            }
        }
    }
}

#[async_trait]
impl SharedCache for MemoryCache {
    async fn set(&self, key: &str, value: &TaskResult, ttl: Duration) -> Result<()> {
        let mut entries = self.entries.write().await;
        let mut stats = self.stats.write().await;

        self.evict_if_needed(&mut entries);

        let now = SystemTime::now();
        let entry = CacheEntry {
            result: value.clone(),
            created_at: now,
            expires_at: now + ttl,
        };

        entries.insert(key.to_string(), entry);
        stats.entry_count = entries.len();
        stats.set_count += 1;
        log::debug!("Cached result under {key:?} with ttl {ttl:?}");

        Ok(())
    }
}

impl Drop for MemoryCache {
    fn drop(&mut self) {
        // Signal cleanup task to shutdown
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            *shutdown.write().await = true;
        });
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}
