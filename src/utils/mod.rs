//! Utility functions shared across the application.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`location`] - Header-safe redirect targets

pub mod code_generator;
pub mod location;
