//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::WeatherService;
use crate::infrastructure::cache::WeatherCache;

/// State shared by every request task.
///
/// Cloning is cheap: both fields are reference-counted handles to
/// process-wide instances created in [`crate::server::run`].
#[derive(Clone)]
pub struct AppState {
    pub weather_service: Arc<WeatherService>,
    pub cache: Arc<dyn WeatherCache>,
}

impl AppState {
    pub fn new(weather_service: Arc<WeatherService>) -> Self {
        let cache = weather_service.cache().clone();
        Self {
            weather_service,
            cache,
        }
    }
}
