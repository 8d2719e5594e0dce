//! Handler for current weather lookups.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use tracing::debug;

use crate::domain::entities::WeatherRecord;
use crate::error::{CodedError, MSG_INVALID_CITY};
use crate::state::AppState;

/// Returns current weather conditions for a city.
///
/// # Endpoint
///
/// `GET /weather/{city}`
///
/// # Request Flow
///
/// 1. Sanitize the city name (400 `INVALID_CITY` on failure)
/// 2. Look up the normalized cache key; a hit is returned verbatim
/// 3. On a miss, fetch from the provider with retry and timeout
/// 4. Store the record in the cache and return it
///
/// # Response
///
/// ```json
/// {
///   "temperature": 75.0,
///   "condition": "Sunny",
///   "humidity": 50.0,
///   "wind": 10.0,
///   "uv": 5.0
/// }
/// ```
///
/// # Errors
///
/// - **400** `INVALID_CITY` - unusable city name (including undecodable path segments)
/// - **404** `CITY_NOT_FOUND` - provider has no matching location
/// - **500** `EXT_API_ERROR` - provider unavailable, quota/key problem or timeout
/// - **500** `API_ERROR` - unexpected provider response or incomplete payload
pub async fn weather_handler(
    State(state): State<AppState>,
    city: Result<Path<String>, PathRejection>,
) -> Result<Json<WeatherRecord>, CodedError> {
    let Path(city) = city.map_err(|e| {
        debug!("Rejected city path segment: {}", e);
        CodedError::invalid_city(MSG_INVALID_CITY)
    })?;

    let record = state.weather_service.current_weather(&city).await?;

    Ok(Json(record))
}
