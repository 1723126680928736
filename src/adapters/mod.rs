//! Infrastructure adapters. Implement outbound ports.
//!
//! Feeds, taxonomy files, the rendered artifact. Map errors to DomainError.

pub mod feed;
pub mod persistence;
pub mod render;
pub mod taxonomy;
