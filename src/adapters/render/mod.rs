//! Renderer adapter. Implements ArtifactWriter for the HTML page.

pub mod html;

pub use html::{DEFAULT_PAGE_TITLE, HtmlRenderer, nodes_to_script_json};
