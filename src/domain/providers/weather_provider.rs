//! Provider trait for current weather conditions.

use crate::domain::entities::{SanitizedCity, WeatherRecord};
use crate::error::CodedError;
use async_trait::async_trait;

/// Source of current weather conditions.
///
/// Implementations own retry, timeout and classification of upstream
/// failures; every error they return is already a [`CodedError`].
///
/// # Implementations
///
/// - [`crate::infrastructure::provider::WeatherApiClient`] - WeatherAPI.com client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetches current conditions for a sanitized city.
    ///
    /// Has no side effects on the cache; storing results is the caller's job.
    ///
    /// # Errors
    ///
    /// - `CITY_NOT_FOUND` if the provider has no matching location
    /// - `EXT_API_ERROR` on provider outage, key/quota problems or timeout
    /// - `API_ERROR` on unclassified responses or incomplete payloads
    async fn fetch_current(&self, city: &SanitizedCity) -> Result<WeatherRecord, CodedError>;
}
