//! Caching layer for weather lookups.
//!
//! Provides a [`WeatherCache`] trait with two implementations:
//! - [`MemoryCache`] - Bounded in-memory TTL cache
//! - [`NullCache`] - No-op implementation for disabled caching

mod memory_cache;
mod null_cache;
mod service;

pub use memory_cache::{DEFAULT_MAX_ENTRIES, MemoryCache};
pub use null_cache::NullCache;
pub use service::{DEFAULT_TTL, WeatherCache};
