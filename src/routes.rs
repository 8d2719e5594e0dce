//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /weather/{city}` - Current weather for a city
//! - anything else         - 404 `API_NOT_FOUND`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Panic capture** - Panics become 500 `UNEXPECTED_ERROR`
//!
//! Trailing-slash normalization is applied around the router in
//! [`crate::server::run`].

use crate::api;
use crate::api::handlers::not_found_handler;
use crate::api::middleware::{panic, tracing};
use crate::state::AppState;
use axum::Router;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::weather_routes())
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .with_state(state)
        .layer(panic::layer())
        .layer(tracing::layer())
}
