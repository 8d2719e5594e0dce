//! HTTP middleware for request processing.
//!
//! Provides request/response logging and panic capture.

pub mod panic;
pub mod tracing;
