//! API route configuration.

use crate::api::handlers::weather_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Weather lookup routes.
///
/// # Endpoints
///
/// - `GET /weather/{city}` - Current conditions for a city
pub fn weather_routes() -> Router<AppState> {
    Router::new().route("/weather/{city}", get(weather_handler))
}
