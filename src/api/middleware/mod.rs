//! HTTP middleware for request processing.
//!
//! - [`tracing`] - Structured request/response logging
//! - [`cors`] - Cross-origin access for browser clients

pub mod cors;
pub mod tracing;
