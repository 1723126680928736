//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, Episode, OutputNode, Taxonomy};
use std::path::PathBuf;

/// Source of episodes (local file, HTTP). Order of the returned vector is feed order.
#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    /// Human-readable location, used in logs and error messages.
    fn location(&self) -> String;

    /// Read and parse the feed. Any failure here is fatal for the run.
    async fn read_episodes(&self) -> Result<Vec<Episode>, DomainError>;
}

/// Provides the taxonomy used for classification. Loaded once per run.
#[async_trait::async_trait]
pub trait TaxonomySource: Send + Sync {
    async fn load(&self) -> Result<Taxonomy, DomainError>;
}

/// Writes the final, pruned node set as a visualization artifact.
#[async_trait::async_trait]
pub trait ArtifactWriter: Send + Sync {
    /// Returns the path of the written artifact.
    async fn write(&self, nodes: &[OutputNode]) -> Result<PathBuf, DomainError>;
}
