//! Application use cases. Classification core plus the pipeline that drives it through ports.

pub mod classifier;
pub mod inference;
pub mod mind_map_service;
pub mod pruner;

pub use classifier::{
    Classification, ClassificationRun, ClassificationStats, NodeSetBuilder, TitleClassifier,
    classify_episodes,
};
pub use mind_map_service::{MindMapService, MindMapSummary};
pub use pruner::{PruneOutcome, prune};
