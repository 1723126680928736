//! Domain entities. Pure data structures for the core business.
//!
//! No XML/HTTP types here; feed items are mapped into `Episode` by adapters.

use serde::{Deserialize, Serialize};

/// Title used when a feed item carries no title.
pub const MISSING_TITLE: &str = "No Title";

/// Link used when a feed item carries no link.
pub const MISSING_LINK: &str = "#";

/// Category assigned to nodes minted from an inferred subject.
pub const INFERRED_CATEGORY: &str = "Inferred";

/// Category shared by all generic bucket nodes.
pub const BUCKET_CATEGORY: &str = "Topic";

/// A single podcast episode as read from the feed. Immutable once read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub title: String,
    pub link: String,
}

impl Episode {
    /// Build an episode, substituting the sentinels for missing or blank fields.
    pub fn from_parts(title: Option<&str>, link: Option<&str>) -> Self {
        fn or_sentinel(value: Option<&str>, sentinel: &str) -> String {
            match value.map(str::trim) {
                Some(v) if !v.is_empty() => v.to_string(),
                _ => sentinel.to_string(),
            }
        }
        Self {
            title: or_sentinel(title, MISSING_TITLE),
            link: or_sentinel(link, MISSING_LINK),
        }
    }
}

/// A curated concept (philosopher, school or topic) with matching keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub id: String,
    pub name: String,
    pub category: String,
    /// External reference (e.g. an encyclopedia article). Empty strings in definition files mean absent.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub reference_url: Option<String>,
    /// Ids this entry depends on. Order is kept as authored; unknown ids are tolerated.
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Matched case-insensitively as substrings, in this order.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Generic bucket for titles that name no known concept (interviews, film episodes, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicBucket {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// One node of the emitted mind map. Handed to the renderer as final data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputNode {
    pub id: String,
    pub name: String,
    pub category: String,
    pub reference_url: Option<String>,
    pub dependencies: Vec<String>,
    /// Feed order.
    pub episodes: Vec<Episode>,
}

impl OutputNode {
    pub fn from_entry(entry: &TaxonomyEntry) -> Self {
        Self {
            id: entry.id.clone(),
            name: entry.name.clone(),
            category: entry.category.clone(),
            reference_url: entry.reference_url.clone(),
            dependencies: entry.dependencies.clone(),
            episodes: Vec::new(),
        }
    }

    pub fn from_bucket(bucket: &TopicBucket) -> Self {
        Self {
            id: bucket.id.clone(),
            name: bucket.name.clone(),
            category: BUCKET_CATEGORY.to_string(),
            reference_url: None,
            dependencies: Vec::new(),
            episodes: Vec::new(),
        }
    }

    /// Node minted at classification time for a subject with no static entry.
    pub fn inferred(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: INFERRED_CATEGORY.to_string(),
            reference_url: None,
            dependencies: Vec::new(),
            episodes: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.episodes.is_empty()
    }
}

/// Which classifier strategy placed an episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    Keyword,
    Inferred,
    Bucket,
    Fallback,
}

impl MatchStrategy {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStrategy::Keyword => "keyword",
            MatchStrategy::Inferred => "inferred",
            MatchStrategy::Bucket => "bucket",
            MatchStrategy::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_sentinels() {
        let ep = Episode::from_parts(None, None);
        assert_eq!(ep.title, "No Title");
        assert_eq!(ep.link, "#");

        let blank = Episode::from_parts(Some("   "), Some(""));
        assert_eq!(blank.title, MISSING_TITLE);
        assert_eq!(blank.link, MISSING_LINK);

        let ep = Episode::from_parts(Some(" Ep. 1: Plato "), Some("http://x/1"));
        assert_eq!(ep.title, "Ep. 1: Plato");
        assert_eq!(ep.link, "http://x/1");
    }

    #[test]
    fn test_entry_empty_reference_url_is_none() {
        let json = r#"{"id": "jung", "name": "Carl Jung", "category": "Psychoanalysis", "reference_url": "", "dependencies": ["freud"], "keywords": ["Jung"]}"#;
        let entry: TaxonomyEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.reference_url, None);
        assert_eq!(entry.dependencies, vec!["freud".to_string()]);
    }

    #[test]
    fn test_bucket_node_uses_topic_category() {
        let bucket = TopicBucket {
            id: "film".into(),
            name: "Film".into(),
            keywords: vec!["Movie".into()],
        };
        let node = OutputNode::from_bucket(&bucket);
        assert_eq!(node.category, "Topic");
        assert_eq!(node.name, "Film");
        assert!(node.dependencies.is_empty());
        assert!(!node.is_active());
    }

    #[test]
    fn test_strategy_serializes_lowercase() {
        let s = serde_json::to_string(&MatchStrategy::Fallback).unwrap();
        assert_eq!(s, "\"fallback\"");
        assert_eq!(MatchStrategy::Inferred.to_string(), "inferred");
    }
}
