//! # Weather API
//!
//! An HTTP service returning current weather conditions for a named city,
//! sourced from WeatherAPI.com, built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Weather record, city/key types and the provider trait
//! - **Application Layer** ([`application`]) - The request pipeline ([`application::services::WeatherService`])
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory TTL cache and the upstream client
//! - **API Layer** ([`api`]) - Handlers, routes and middleware
//!
//! ## Request Pipeline
//!
//! raw city → sanitize → cache key → cache lookup (hit returns) → provider
//! fetch with retry and timeout → cache store → JSON response.
//!
//! ## Quick Start
//!
//! ```bash
//! export WEATHER_API_KEY="your-key"
//! cargo run
//! curl http://localhost:3000/weather/London
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{CodedError, ErrorCode};
pub use state::AppState;
