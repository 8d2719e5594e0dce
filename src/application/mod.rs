//! Application layer services implementing business logic.
//!
//! Services orchestrate domain operations by coordinating the cache, the
//! upstream provider and input validation, and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::weather_service::WeatherService`] - Sanitize, cache and fetch current weather
pub mod services;
