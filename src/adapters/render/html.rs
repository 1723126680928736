//! Implements ArtifactWriter as a single-page HTML mind map.
//!
//! The page embeds the node list as JSON; layout happens client-side (D3).

use crate::adapters::persistence::write_atomic;
use crate::domain::{DomainError, OutputNode};
use crate::ports::ArtifactWriter;
use chrono::Utc;
use minijinja::{Environment, UndefinedBehavior, context};
use std::path::{Path, PathBuf};
use tracing::info;

const TEMPLATE_NAME: &str = "mind_map.html";
const TEMPLATE: &str = include_str!("mind_map.html");

/// Default page heading.
pub const DEFAULT_PAGE_TITLE: &str = "Philosophy Podcast Mind Map";

/// Serialize nodes for embedding in a `<script>` block. `</` is escaped so no title can close the tag.
pub fn nodes_to_script_json(nodes: &[OutputNode]) -> Result<String, DomainError> {
    let json =
        serde_json::to_string_pretty(nodes).map_err(|e| DomainError::Render(e.to_string()))?;
    Ok(json.replace("</", "<\\/"))
}

pub struct HtmlRenderer {
    env: Environment<'static>,
    output: PathBuf,
    page_title: String,
}

impl HtmlRenderer {
    pub fn new(output: impl AsRef<Path>, page_title: impl Into<String>) -> Result<Self, DomainError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_template(TEMPLATE_NAME, TEMPLATE)
            .map_err(|e| DomainError::Render(format!("template: {}", e)))?;
        Ok(Self {
            env,
            output: output.as_ref().to_path_buf(),
            page_title: page_title.into(),
        })
    }

    /// Render the page without writing it.
    pub fn render(&self, nodes: &[OutputNode]) -> Result<String, DomainError> {
        let template = self
            .env
            .get_template(TEMPLATE_NAME)
            .map_err(|e| DomainError::Render(e.to_string()))?;
        let episode_count: usize = nodes.iter().map(|n| n.episodes.len()).sum();
        template
            .render(context! {
                page_title => self.page_title.as_str(),
                version => env!("CARGO_PKG_VERSION"),
                generated_at => Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
                node_count => nodes.len(),
                episode_count => episode_count,
                nodes_json => nodes_to_script_json(nodes)?,
            })
            .map_err(|e| DomainError::Render(e.to_string()))
    }
}

#[async_trait::async_trait]
impl ArtifactWriter for HtmlRenderer {
    async fn write(&self, nodes: &[OutputNode]) -> Result<PathBuf, DomainError> {
        let html = self.render(nodes)?;
        write_atomic(&self.output, html.as_bytes())
            .await
            .map_err(|e| DomainError::Render(format!("write {}: {}", self.output.display(), e)))?;
        let abs_path = self
            .output
            .canonicalize()
            .unwrap_or_else(|_| self.output.clone());
        info!(
            path = %abs_path.display(),
            nodes = nodes.len(),
            "Successfully created {}",
            abs_path.display()
        );
        Ok(self.output.clone())
    }
}
