//! Current-weather lookup service.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::WeatherRecord;
use crate::domain::providers::WeatherProvider;
use crate::error::CodedError;
use crate::infrastructure::cache::WeatherCache;
use crate::utils::cache_key::normalize_key;
use crate::utils::city_sanitizer::sanitize_city;
use tracing::debug;

/// Service running the weather request pipeline.
///
/// sanitize → derive cache key → cache lookup → (miss) provider fetch →
/// cache store. Created once at startup and shared by reference; the cache
/// is only reset through an explicit [`WeatherCache::flush`].
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
    cache: Arc<dyn WeatherCache>,
    cache_ttl: Duration,
}

impl WeatherService {
    /// Creates a new weather service.
    pub fn new(
        provider: Arc<dyn WeatherProvider>,
        cache: Arc<dyn WeatherCache>,
        cache_ttl: Duration,
    ) -> Self {
        Self {
            provider,
            cache,
            cache_ttl,
        }
    }

    /// Returns current conditions for a raw, untrusted city name.
    ///
    /// A cache hit returns the stored record without contacting the
    /// provider. On a miss the fetched record is cached before returning.
    /// Concurrent misses for the same city may both reach the provider; the
    /// second write overwrites the first with an equivalent record.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_CITY` if the name fails sanitization, otherwise the
    /// provider's [`CodedError`] unchanged.
    pub async fn current_weather(&self, raw_city: &str) -> Result<WeatherRecord, CodedError> {
        let city = sanitize_city(raw_city)?;
        let key = normalize_key(city.as_str());

        if let Some(record) = self.cache.get(&key).await {
            debug!("Serving '{}' from cache ({})", city, key);
            return Ok(record);
        }

        let record = self.provider.fetch_current(&city).await?;

        self.cache
            .set(key, record.clone(), Some(self.cache_ttl))
            .await;

        Ok(record)
    }

    /// Shared cache handle.
    pub fn cache(&self) -> &Arc<dyn WeatherCache> {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::providers::MockWeatherProvider;
    use crate::error::ErrorCode;
    use crate::infrastructure::cache::{MemoryCache, NullCache};

    fn record(temperature: f64, condition: &str) -> WeatherRecord {
        WeatherRecord {
            temperature,
            condition: condition.to_string(),
            humidity: 50.0,
            wind: 10.0,
            uv: 5.0,
        }
    }

    fn service_with(provider: MockWeatherProvider, cache: Arc<dyn WeatherCache>) -> WeatherService {
        WeatherService::new(Arc::new(provider), cache, Duration::from_secs(600))
    }

    #[tokio::test]
    async fn test_cache_miss_fetches_and_stores() {
        let mut provider = MockWeatherProvider::new();
        provider
            .expect_fetch_current()
            .withf(|city| city.as_str() == "New York")
            .times(1)
            .returning(|_| Ok(record(75.0, "Sunny")));

        let cache: Arc<dyn WeatherCache> = Arc::new(MemoryCache::default());
        let service = service_with(provider, cache.clone());

        let result = service.current_weather("New York").await.unwrap();

        assert_eq!(result, record(75.0, "Sunny"));
        assert_eq!(
            cache.get(&normalize_key("New York")).await,
            Some(record(75.0, "Sunny"))
        );
    }

    #[tokio::test]
    async fn test_cache_hit_skips_provider() {
        let mut provider = MockWeatherProvider::new();
        provider.expect_fetch_current().times(0);

        let cache: Arc<dyn WeatherCache> = Arc::new(MemoryCache::default());
        cache
            .set(normalize_key("London"), record(70.0, "Cloudy"), None)
            .await;

        let service = service_with(provider, cache);

        let result = service.current_weather("London").await.unwrap();
        assert_eq!(result, record(70.0, "Cloudy"));
    }

    #[tokio::test]
    async fn test_second_request_served_from_cache() {
        let mut provider = MockWeatherProvider::new();
        provider
            .expect_fetch_current()
            .times(1)
            .returning(|_| Ok(record(12.0, "Rain")));

        let service = service_with(provider, Arc::new(MemoryCache::default()));

        let first = service.current_weather("São Paulo").await.unwrap();
        let second = service.current_weather("Sao Paulo").await.unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_invalid_city_never_reaches_provider() {
        let mut provider = MockWeatherProvider::new();
        provider.expect_fetch_current().times(0);

        let service = service_with(provider, Arc::new(MemoryCache::default()));

        let err = service
            .current_weather(&"x".repeat(150))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidCity);
    }

    #[tokio::test]
    async fn test_provider_error_propagates_unchanged_and_not_cached() {
        let mut provider = MockWeatherProvider::new();
        provider
            .expect_fetch_current()
            .times(2)
            .returning(|_| Err(CodedError::city_not_found("provider code 1006")));

        let cache: Arc<dyn WeatherCache> = Arc::new(MemoryCache::default());
        let service = service_with(provider, cache.clone());

        let err = service.current_weather("Atlantis").await.unwrap_err();
        assert_eq!(err, CodedError::city_not_found("provider code 1006"));
        assert!(!cache.has(&normalize_key("Atlantis")));

        // Failures are not cached, so the provider is asked again.
        let err = service.current_weather("Atlantis").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::CityNotFound);
    }

    #[tokio::test]
    async fn test_null_cache_always_fetches() {
        let mut provider = MockWeatherProvider::new();
        provider
            .expect_fetch_current()
            .times(2)
            .returning(|_| Ok(record(5.0, "Mist")));

        let service = service_with(provider, Arc::new(NullCache::new()));

        service.current_weather("Dublin").await.unwrap();
        service.current_weather("Dublin").await.unwrap();
    }
}
