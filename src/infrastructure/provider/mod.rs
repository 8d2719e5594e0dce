//! Upstream weather provider integration.
//!
//! - [`WeatherApiClient`] - WeatherAPI.com current-conditions client
//! - [`RetryPolicy`] - Bounded linear back-off between attempts

mod dto;
mod retry;
mod weather_api_client;

pub use retry::RetryPolicy;
pub use weather_api_client::{
    DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, WeatherApiClient, classify_error_code,
};
