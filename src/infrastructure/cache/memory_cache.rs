//! In-memory TTL cache backed by `moka`.

use super::service::{DEFAULT_TTL, WeatherCache};
use crate::domain::entities::{CacheKey, WeatherRecord};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use moka::Expiry;
use moka::future::Cache;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default upper bound on the number of cached cities.
pub const DEFAULT_MAX_ENTRIES: u64 = 10_000;

#[derive(Debug, Clone)]
struct CacheEntry {
    record: WeatherRecord,
    inserted_at: DateTime<Utc>,
    ttl: Duration,
}

/// Expires each entry `ttl` after it was inserted or last overwritten.
struct EntryExpiry;

impl Expiry<CacheKey, CacheEntry> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &CacheKey,
        value: &CacheEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &CacheKey,
        value: &CacheEntry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Process-local weather cache.
///
/// Bounded by `max_entries`; beyond that moka evicts the least valuable
/// entries (TinyLFU admission, LRU eviction). Expired entries are never
/// returned and are swept by moka's housekeeping.
pub struct MemoryCache {
    inner: Cache<CacheKey, CacheEntry>,
    default_ttl: Duration,
}

impl MemoryCache {
    /// Creates a cache holding at most `max_entries` records, each living
    /// `default_ttl` unless [`WeatherCache::set`] overrides it.
    pub fn new(max_entries: u64, default_ttl: Duration) -> Self {
        info!(
            "In-memory cache enabled (max entries: {}, TTL: {}s)",
            max_entries,
            default_ttl.as_secs()
        );

        let inner = Cache::builder()
            .max_capacity(max_entries)
            .expire_after(EntryExpiry)
            .build();

        Self { inner, default_ttl }
    }

    /// Runs pending housekeeping (expiry sweep, eviction) immediately.
    pub async fn sync(&self) {
        self.inner.run_pending_tasks().await;
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES, DEFAULT_TTL)
    }
}

#[async_trait]
impl WeatherCache for MemoryCache {
    fn has(&self, key: &CacheKey) -> bool {
        self.inner.contains_key(key)
    }

    async fn get(&self, key: &CacheKey) -> Option<WeatherRecord> {
        match self.inner.get(key).await {
            Some(entry) => {
                let age = Utc::now() - entry.inserted_at;
                debug!("Cache HIT: {} (age: {}s)", key, age.num_seconds());
                Some(entry.record)
            }
            None => {
                debug!("Cache MISS: {}", key);
                None
            }
        }
    }

    async fn set(&self, key: CacheKey, value: WeatherRecord, ttl: Option<Duration>) {
        let ttl = ttl.unwrap_or(self.default_ttl);
        debug!("Cache SET: {} (TTL: {}s)", key, ttl.as_secs());

        let entry = CacheEntry {
            record: value,
            inserted_at: Utc::now(),
            ttl,
        };
        self.inner.insert(key, entry).await;
    }

    fn flush(&self) {
        debug!("Cache FLUSH");
        self.inner.invalidate_all();
    }

    fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}
