//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. Per-episode classification never fails;
//! only an unusable feed or taxonomy stops the pipeline.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Feed could not be located, fetched or parsed. Fatal: no artifact is produced.
    #[error("Feed unavailable: {0}")]
    Feed(String),

    #[error("No episodes found in feed: {0}")]
    EmptyFeed(String),

    #[error("Invalid taxonomy: {0}")]
    Taxonomy(String),

    #[error("Render failed: {0}")]
    Render(String),
}
