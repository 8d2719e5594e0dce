//! No-op cache implementation for disabled caching.

use super::service::WeatherCache;
use crate::domain::entities::{CacheKey, WeatherRecord};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when caching is disabled via `CACHE_ENABLED=false`: every lookup is a
/// miss, so every request goes upstream.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherCache for NullCache {
    fn has(&self, _key: &CacheKey) -> bool {
        false
    }

    async fn get(&self, _key: &CacheKey) -> Option<WeatherRecord> {
        None
    }

    async fn set(&self, _key: CacheKey, _value: WeatherRecord, _ttl: Option<Duration>) {}

    fn flush(&self) {}

    fn entry_count(&self) -> u64 {
        0
    }
}
