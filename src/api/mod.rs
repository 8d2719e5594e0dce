//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses according to the API contract.
//!
//! # Modules
//!
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request logging and panic capture
//! - [`routes`] - Route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
