//! Domain layer: entities and provider interfaces.
//!
//! # Architecture
//!
//! - [`entities`] - Weather record, sanitized city and cache key types
//! - [`providers`] - Upstream data source trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers; the pipeline that ties it together lives in
//! [`crate::application::services`].

pub mod entities;
pub mod providers;
