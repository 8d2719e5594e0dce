//! Input processing helpers used by the request pipeline.
//!
//! - [`city_sanitizer`] - City name validation and normalization
//! - [`cache_key`] - Canonical cache key derivation

pub mod cache_key;
pub mod city_sanitizer;
