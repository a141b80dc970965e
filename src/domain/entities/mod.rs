//! Core domain entities.
//!
//! Entities are plain data structures without business logic. Creation input
//! lives in a separate struct ([`NewLink`]) so the store alone decides the
//! initial counters and timestamps.

pub mod link;

pub use link::{Link, NewLink};
