//! Implements TaxonomySource from JSON definitions.
//!
//! The curated default ships inside the binary; a file on disk can replace it.

use crate::domain::{DomainError, Taxonomy};
use crate::ports::TaxonomySource;
use std::path::PathBuf;
use tokio::fs;
use tracing::info;

/// Curated philosopher/topic table with the generic buckets.
const DEFAULT_TAXONOMY: &str = include_str!("default_taxonomy.json");

/// Parse and validate a taxonomy definition.
pub fn parse_taxonomy(json: &str) -> Result<Taxonomy, DomainError> {
    let taxonomy: Taxonomy =
        serde_json::from_str(json).map_err(|e| DomainError::Taxonomy(e.to_string()))?;
    taxonomy.validate()?;
    Ok(taxonomy)
}

pub fn default_taxonomy() -> Result<Taxonomy, DomainError> {
    parse_taxonomy(DEFAULT_TAXONOMY)
}

/// Built-in taxonomy, or the JSON file at `path` when set.
pub struct JsonTaxonomySource {
    path: Option<PathBuf>,
}

impl JsonTaxonomySource {
    pub fn builtin() -> Self {
        Self { path: None }
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

#[async_trait::async_trait]
impl TaxonomySource for JsonTaxonomySource {
    async fn load(&self) -> Result<Taxonomy, DomainError> {
        let (taxonomy, origin) = match &self.path {
            Some(path) => {
                let json = fs::read_to_string(path).await.map_err(|e| {
                    DomainError::Taxonomy(format!("read {}: {}", path.display(), e))
                })?;
                (parse_taxonomy(&json)?, path.display().to_string())
            }
            None => (default_taxonomy()?, "built-in".to_string()),
        };
        info!(
            origin = %origin,
            entries = taxonomy.entries.len(),
            buckets = taxonomy.buckets.len(),
            "loaded taxonomy"
        );
        Ok(taxonomy)
    }
}
