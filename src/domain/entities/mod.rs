//! Core domain entities.
//!
//! - [`WeatherRecord`] - Current conditions returned to clients and cached
//! - [`SanitizedCity`] - A validated city name, safe to send upstream
//! - [`CacheKey`] - Canonical slug used for cache lookups

pub mod city;
pub mod weather;

pub use city::{CacheKey, SanitizedCity};
pub use weather::WeatherRecord;
