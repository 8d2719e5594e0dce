//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for caching and the upstream weather provider.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (in-memory TTL and no-op implementations)
//! - [`provider`] - WeatherAPI.com client with retry and error classification

pub mod cache;
pub mod provider;
