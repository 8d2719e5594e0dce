//! Cache service trait.

use crate::domain::entities::{CacheKey, WeatherRecord};
use async_trait::async_trait;
use std::time::Duration;

/// Default time-to-live for cached weather records.
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

/// Process-local store for weather records keyed by [`CacheKey`].
///
/// Entries expire a fixed time after insertion; an expired entry behaves as
/// absent on [`WeatherCache::has`] and [`WeatherCache::get`]. Implementations
/// must be thread-safe: the cache is shared by every request task.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - In-memory TTL cache (moka)
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait WeatherCache: Send + Sync {
    /// Returns true if a live entry exists for `key`.
    fn has(&self, key: &CacheKey) -> bool;

    /// Retrieves the cached record for `key`.
    ///
    /// # Returns
    ///
    /// - `Some(record)` on cache hit
    /// - `None` on cache miss or expired entry
    async fn get(&self, key: &CacheKey) -> Option<WeatherRecord>;

    /// Stores a record with an optional TTL.
    ///
    /// `None` applies the cache's default TTL. Overwriting an existing key
    /// restarts its TTL.
    async fn set(&self, key: CacheKey, value: WeatherRecord, ttl: Option<Duration>);

    /// Removes every entry.
    fn flush(&self);

    /// Approximate number of live entries.
    fn entry_count(&self) -> u64;
}
