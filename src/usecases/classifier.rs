//! Title classifier: assigns every episode to exactly one node.
//!
//! Strategies, first hit wins:
//! 1. Keyword match over taxonomy entries (definition order, then keyword order)
//! 2. Subject inference ("Name on Topic", "Name's Work"), minting a node when needed
//! 3. Keyword match over generic buckets (catch-all excluded)
//! 4. Catch-all bucket
//!
//! The taxonomy is never mutated. Nodes minted in step 2 are collected by
//! `NodeSetBuilder` apart from the static nodes and merged at the end.

use crate::domain::{Episode, MatchStrategy, OutputNode, Taxonomy};
use crate::usecases::inference::{infer_subject, subject_slug};
use std::collections::HashMap;
use tracing::{debug, info};

/// Outcome of classifying one title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Keyword { id: String },
    Inferred { id: String, name: String },
    Bucket { id: String },
    Fallback { id: String },
}

impl Classification {
    pub fn id(&self) -> &str {
        match self {
            Classification::Keyword { id }
            | Classification::Inferred { id, .. }
            | Classification::Bucket { id }
            | Classification::Fallback { id } => id,
        }
    }

    pub fn strategy(&self) -> MatchStrategy {
        match self {
            Classification::Keyword { .. } => MatchStrategy::Keyword,
            Classification::Inferred { .. } => MatchStrategy::Inferred,
            Classification::Bucket { .. } => MatchStrategy::Bucket,
            Classification::Fallback { .. } => MatchStrategy::Fallback,
        }
    }
}

/// Keywords of one node, lowercased once.
struct KeywordSet<'a> {
    id: &'a str,
    keywords: Vec<String>,
}

impl<'a> KeywordSet<'a> {
    fn new(id: &'a str, keywords: &[String]) -> Self {
        Self {
            id,
            // A blank keyword would match every title.
            keywords: keywords
                .iter()
                .filter(|k| !k.trim().is_empty())
                .map(|k| k.to_lowercase())
                .collect(),
        }
    }

    fn matches(&self, title_lower: &str) -> bool {
        self.keywords.iter().any(|k| title_lower.contains(k.as_str()))
    }
}

fn first_match<'s>(sets: &'s [KeywordSet<'_>], title_lower: &str) -> Option<&'s str> {
    sets.iter().find(|s| s.matches(title_lower)).map(|s| s.id)
}

/// Stateless matcher over a borrowed taxonomy.
pub struct TitleClassifier<'a> {
    taxonomy: &'a Taxonomy,
    entries: Vec<KeywordSet<'a>>,
    buckets: Vec<KeywordSet<'a>>,
}

impl<'a> TitleClassifier<'a> {
    pub fn new(taxonomy: &'a Taxonomy) -> Self {
        let entries = taxonomy
            .entries
            .iter()
            .map(|e| KeywordSet::new(&e.id, &e.keywords))
            .collect();
        let buckets = taxonomy
            .matchable_buckets()
            .map(|b| KeywordSet::new(&b.id, &b.keywords))
            .collect();
        Self {
            taxonomy,
            entries,
            buckets,
        }
    }

    /// Pick the destination for one title. Never fails.
    pub fn classify(&self, title: &str) -> Classification {
        let title_lower = title.to_lowercase();

        if let Some(id) = first_match(&self.entries, &title_lower) {
            return Classification::Keyword { id: id.to_string() };
        }

        if let Some(name) = infer_subject(title, &self.taxonomy.title_labels) {
            return Classification::Inferred {
                id: subject_slug(&name),
                name,
            };
        }

        if let Some(id) = first_match(&self.buckets, &title_lower) {
            return Classification::Bucket { id: id.to_string() };
        }

        Classification::Fallback {
            id: self.taxonomy.catch_all.clone(),
        }
    }
}

/// Working copy of the node set for a single run.
///
/// Static entries and buckets are seeded up front; inferred nodes are kept in
/// `discovered` (first-seen order) and appended by `finish`.
pub struct NodeSetBuilder {
    nodes: Vec<OutputNode>,
    discovered: Vec<OutputNode>,
    index: HashMap<String, Slot>,
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Seeded(usize),
    Discovered(usize),
}

impl NodeSetBuilder {
    pub fn new(taxonomy: &Taxonomy) -> Self {
        let nodes: Vec<OutputNode> = taxonomy
            .entries
            .iter()
            .map(OutputNode::from_entry)
            .chain(taxonomy.buckets.iter().map(OutputNode::from_bucket))
            .collect();
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), Slot::Seeded(i)))
            .collect();
        Self {
            nodes,
            discovered: Vec::new(),
            index,
        }
    }

    /// Append `episode` to the node named by `classification`, minting it if unknown.
    /// An inferred id equal to an existing node id reuses that node.
    pub fn assign(&mut self, classification: &Classification, episode: Episode) {
        let id = classification.id();
        let slot = match self.index.get(id).copied() {
            Some(slot) => slot,
            None => {
                let name = match classification {
                    Classification::Inferred { name, .. } => name.as_str(),
                    other => other.id(),
                };
                debug!(id, name, "discovered node");
                self.discovered.push(OutputNode::inferred(id, name));
                let slot = Slot::Discovered(self.discovered.len() - 1);
                self.index.insert(id.to_string(), slot);
                slot
            }
        };
        let node = match slot {
            Slot::Seeded(i) => &mut self.nodes[i],
            Slot::Discovered(i) => &mut self.discovered[i],
        };
        node.episodes.push(episode);
    }

    pub fn discovered_count(&self) -> usize {
        self.discovered.len()
    }

    pub fn node(&self, id: &str) -> Option<&OutputNode> {
        self.index.get(id).map(|slot| match *slot {
            Slot::Seeded(i) => &self.nodes[i],
            Slot::Discovered(i) => &self.discovered[i],
        })
    }

    /// Static entries, then buckets, then discovered nodes.
    pub fn finish(self) -> Vec<OutputNode> {
        let mut nodes = self.nodes;
        nodes.extend(self.discovered);
        nodes
    }
}

/// Counters for one classification run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClassificationStats {
    pub total: usize,
    pub keyword: usize,
    pub inferred: usize,
    pub bucket: usize,
    pub fallback: usize,
    pub discovered_nodes: usize,
    /// Episodes held by the catch-all node (fallback plus any inferred subject colliding with it).
    pub catch_all_size: usize,
}

impl ClassificationStats {
    fn record(&mut self, strategy: MatchStrategy) {
        self.total += 1;
        match strategy {
            MatchStrategy::Keyword => self.keyword += 1,
            MatchStrategy::Inferred => self.inferred += 1,
            MatchStrategy::Bucket => self.bucket += 1,
            MatchStrategy::Fallback => self.fallback += 1,
        }
    }
}

/// Full node set (before pruning) plus run counters.
#[derive(Debug, Clone)]
pub struct ClassificationRun {
    pub nodes: Vec<OutputNode>,
    pub stats: ClassificationStats,
}

/// Classify `episodes` in feed order.
pub fn classify_episodes(taxonomy: &Taxonomy, episodes: &[Episode]) -> ClassificationRun {
    let classifier = TitleClassifier::new(taxonomy);
    let mut builder = NodeSetBuilder::new(taxonomy);
    let mut stats = ClassificationStats::default();

    for episode in episodes {
        let classification = classifier.classify(&episode.title);
        let strategy = classification.strategy();
        debug!(
            title = %episode.title,
            node = classification.id(),
            strategy = %strategy,
            "classified episode"
        );
        stats.record(strategy);
        builder.assign(&classification, episode.clone());
    }

    stats.discovered_nodes = builder.discovered_count();
    stats.catch_all_size = builder
        .node(&taxonomy.catch_all)
        .map(|n| n.episodes.len())
        .unwrap_or(0);

    info!(
        total = stats.total,
        keyword = stats.keyword,
        inferred = stats.inferred,
        bucket = stats.bucket,
        fallback = stats.fallback,
        discovered = stats.discovered_nodes,
        "classification complete"
    );

    ClassificationRun {
        nodes: builder.finish(),
        stats,
    }
}
