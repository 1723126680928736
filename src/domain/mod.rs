//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the taxonomy store and errors live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod taxonomy;

pub use entities::{
    BUCKET_CATEGORY, Episode, INFERRED_CATEGORY, MISSING_LINK, MISSING_TITLE, MatchStrategy,
    OutputNode, TaxonomyEntry, TopicBucket,
};
pub use errors::DomainError;
pub use taxonomy::Taxonomy;
