//! Port traits. API boundaries for the hexagon.
//!
//! - Outbound: Called by the application into infrastructure (feeds, taxonomy files, artifacts)

pub mod outbound;

pub use outbound::{ArtifactWriter, FeedSource, TaxonomySource};
