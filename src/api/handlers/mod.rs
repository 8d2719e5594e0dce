//! HTTP request handlers for API endpoints.

pub mod fallback;
pub mod weather;

pub use fallback::not_found_handler;
pub use weather::weather_handler;
