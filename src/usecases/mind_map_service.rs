//! Mind map pipeline: taxonomy -> feed -> classify -> prune -> artifact.
//!
//! - Single pass, feed order preserved
//! - Only feed/taxonomy/render failures abort; unmatched episodes go to the catch-all
//! - Exactly one artifact per run

use crate::domain::{DomainError, Taxonomy};
use crate::ports::{ArtifactWriter, FeedSource, TaxonomySource};
use crate::usecases::classifier::classify_episodes;
use crate::usecases::pruner::prune;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// Pipeline service. Wires the classifier and pruner to the I/O ports.
pub struct MindMapService {
    taxonomy: Arc<dyn TaxonomySource>,
    feed: Arc<dyn FeedSource>,
    writer: Arc<dyn ArtifactWriter>,
}

impl MindMapService {
    pub fn new(
        taxonomy: Arc<dyn TaxonomySource>,
        feed: Arc<dyn FeedSource>,
        writer: Arc<dyn ArtifactWriter>,
    ) -> Self {
        Self {
            taxonomy,
            feed,
            writer,
        }
    }

    pub async fn run(&self) -> Result<MindMapSummary, DomainError> {
        let taxonomy = self.taxonomy.load().await?;
        log_dangling(&taxonomy);

        let episodes = self.feed.read_episodes().await?;
        if episodes.is_empty() {
            return Err(DomainError::EmptyFeed(self.feed.location()));
        }
        info!(
            count = episodes.len(),
            source = %self.feed.location(),
            "read episodes"
        );

        let run = classify_episodes(&taxonomy, &episodes);
        let pruned = prune(run.nodes);

        info!(
            total = run.stats.total,
            "Total episodes processed: {}",
            run.stats.total
        );
        info!(
            bucket = %taxonomy.catch_all,
            size = run.stats.catch_all_size,
            "General/Misc bucket size: {}",
            run.stats.catch_all_size
        );

        let artifact = self.writer.write(&pruned.nodes).await?;

        let summary = MindMapSummary {
            episodes: run.stats.total,
            active_nodes: pruned.nodes.len(),
            discovered_nodes: run.stats.discovered_nodes,
            catch_all: run.stats.catch_all_size,
            dangling_refs: pruned.dangling,
            artifact,
        };
        info!(
            episodes = summary.episodes,
            active_nodes = summary.active_nodes,
            discovered = summary.discovered_nodes,
            "mind map complete"
        );
        Ok(summary)
    }
}

fn log_dangling(taxonomy: &Taxonomy) {
    for (entry, dep) in taxonomy.dangling_dependencies() {
        debug!(entry, dependency = dep, "taxonomy dependency names no node");
    }
}

/// Result of a pipeline run.
#[derive(Debug, Default)]
pub struct MindMapSummary {
    pub episodes: usize,
    pub active_nodes: usize,
    pub discovered_nodes: usize,
    pub catch_all: usize,
    pub dangling_refs: usize,
    pub artifact: PathBuf,
}
