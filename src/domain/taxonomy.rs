//! Taxonomy store. Ordered, immutable set of concepts plus generic buckets.
//!
//! Matching is first-match-wins over definition order, so entries and buckets are
//! kept as vectors rather than maps.

use super::entities::{TaxonomyEntry, TopicBucket};
use super::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

fn default_title_labels() -> Vec<String> {
    vec!["Closereads".to_string()]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub entries: Vec<TaxonomyEntry>,
    pub buckets: Vec<TopicBucket>,
    /// Bucket receiving every episode no strategy could place.
    pub catch_all: String,
    /// Leading title labels stripped before subject inference (colon optional).
    #[serde(default = "default_title_labels")]
    pub title_labels: Vec<String>,
}

impl Taxonomy {
    /// Check structural rules. Dangling dependency ids are allowed and only dropped at pruning.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen: HashSet<&str> = HashSet::new();
        let ids = self
            .entries
            .iter()
            .map(|e| e.id.as_str())
            .chain(self.buckets.iter().map(|b| b.id.as_str()));
        for id in ids {
            if id.trim().is_empty() {
                return Err(DomainError::Taxonomy("empty node id".to_string()));
            }
            if !seen.insert(id) {
                return Err(DomainError::Taxonomy(format!("duplicate node id '{}'", id)));
            }
        }
        if self.bucket(&self.catch_all).is_none() {
            return Err(DomainError::Taxonomy(format!(
                "catch-all '{}' is not a defined bucket",
                self.catch_all
            )));
        }
        Ok(())
    }

    pub fn entry(&self, id: &str) -> Option<&TaxonomyEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn bucket(&self, id: &str) -> Option<&TopicBucket> {
        self.buckets.iter().find(|b| b.id == id)
    }

    /// True when `id` names a static entry or a bucket.
    pub fn contains(&self, id: &str) -> bool {
        self.entry(id).is_some() || self.bucket(id).is_some()
    }

    /// Buckets consulted by keyword, in definition order. Excludes the catch-all.
    pub fn matchable_buckets(&self) -> impl Iterator<Item = &TopicBucket> {
        self.buckets.iter().filter(move |b| b.id != self.catch_all)
    }

    /// `(entry id, dependency id)` pairs whose dependency names no known node.
    pub fn dangling_dependencies(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .flat_map(|e| {
                e.dependencies
                    .iter()
                    .filter(|d| !self.contains(d))
                    .map(move |d| (e.id.as_str(), d.as_str()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, deps: &[&str]) -> TaxonomyEntry {
        TaxonomyEntry {
            id: id.to_string(),
            name: id.to_uppercase(),
            category: "Ancient".to_string(),
            reference_url: None,
            dependencies: deps.iter().map(|s| s.to_string()).collect(),
            keywords: vec![id.to_string()],
        }
    }

    fn bucket(id: &str) -> TopicBucket {
        TopicBucket {
            id: id.to_string(),
            name: id.to_string(),
            keywords: vec![],
        }
    }

    fn taxonomy() -> Taxonomy {
        Taxonomy {
            entries: vec![entry("plato", &["socrates"]), entry("socrates", &["wagner"])],
            buckets: vec![bucket("film"), bucket("general")],
            catch_all: "general".to_string(),
            title_labels: default_title_labels(),
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(taxonomy().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut t = taxonomy();
        t.buckets.push(bucket("plato"));
        let err = t.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate node id 'plato'"));
    }

    #[test]
    fn test_validate_rejects_unknown_catch_all() {
        let mut t = taxonomy();
        t.catch_all = "misc".to_string();
        assert!(matches!(t.validate(), Err(DomainError::Taxonomy(_))));
    }

    #[test]
    fn test_matchable_buckets_skip_catch_all() {
        let t = taxonomy();
        let ids: Vec<&str> = t.matchable_buckets().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["film"]);
    }

    #[test]
    fn test_dangling_dependencies() {
        let t = taxonomy();
        assert_eq!(t.dangling_dependencies(), vec![("socrates", "wagner")]);
    }

    #[test]
    fn test_title_labels_default_when_absent() {
        let json = r#"{"entries": [], "buckets": [{"id": "general", "name": "General"}], "catch_all": "general"}"#;
        let t: Taxonomy = serde_json::from_str(json).unwrap();
        assert_eq!(t.title_labels, vec!["Closereads".to_string()]);
        assert!(t.validate().is_ok());
    }
}
