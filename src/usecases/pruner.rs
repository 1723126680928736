//! Graph pruner. Keeps nodes that carry episodes plus their direct dependencies.
//!
//! The closure is one hop only: a dependency of a dependency survives only if it has
//! episodes itself or is directly referenced by a node that does.

use crate::domain::OutputNode;
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct PruneOutcome {
    /// Retained nodes in their original order.
    pub nodes: Vec<OutputNode>,
    /// References from active nodes to ids that name no node. Ignored, counted for diagnostics.
    pub dangling: usize,
}

pub fn prune(nodes: Vec<OutputNode>) -> PruneOutcome {
    let known: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let mut keep: HashSet<String> = HashSet::new();
    let mut dangling = 0usize;

    for node in nodes.iter().filter(|n| n.is_active()) {
        keep.insert(node.id.clone());
        for dep in &node.dependencies {
            if known.contains(dep.as_str()) {
                keep.insert(dep.clone());
            } else {
                debug!(node = %node.id, dependency = %dep, "ignoring unknown dependency");
                dangling += 1;
            }
        }
    }

    let total = nodes.len();
    let nodes: Vec<OutputNode> = nodes.into_iter().filter(|n| keep.contains(&n.id)).collect();
    debug!(total, kept = nodes.len(), dangling, "pruned node set");

    PruneOutcome { nodes, dangling }
}
