//! Provider trait definitions for the domain layer.
//!
//! Traits are implemented in `crate::infrastructure::provider`; mock
//! implementations are generated via `mockall` for unit tests.

pub mod weather_provider;

pub use weather_provider::WeatherProvider;

#[cfg(test)]
pub use weather_provider::MockWeatherProvider;
