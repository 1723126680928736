//! Application configuration. Feed location, taxonomy override, output path.
//!
//! Sources, lowest to highest precedence: optional file named by PEL_MAP_CONFIG,
//! then PEL_MAP_* environment variables (a `.env` file is honoured).

use serde::Deserialize;

pub const DEFAULT_FEED: &str = "pel.xml";
pub const DEFAULT_OUTPUT: &str = "index.html";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Feed file path or http(s) URL. Read from PEL_MAP_FEED.
    #[serde(default)]
    pub feed: Option<String>,

    /// HTML artifact path. Read from PEL_MAP_OUTPUT.
    #[serde(default)]
    pub output: Option<String>,

    /// JSON taxonomy replacing the built-in one. Read from PEL_MAP_TAXONOMY_PATH.
    #[serde(default)]
    pub taxonomy_path: Option<String>,

    /// Page heading. Read from PEL_MAP_PAGE_TITLE.
    #[serde(default)]
    pub page_title: Option<String>,

    /// Timeout for remote feeds in seconds (default 30). Read from PEL_MAP_FETCH_TIMEOUT_SECS.
    #[serde(default)]
    pub fetch_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("PEL_MAP_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("PEL_MAP").try_parsing(true));
        c.build()?.try_deserialize()
    }

    pub fn feed_or_default(&self) -> String {
        self.feed
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FEED.to_string())
    }

    pub fn output_or_default(&self) -> String {
        self.output
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OUTPUT.to_string())
    }

    pub fn page_title_or_default(&self) -> String {
        self.page_title
            .clone()
            .unwrap_or_else(|| crate::adapters::render::DEFAULT_PAGE_TITLE.to_string())
    }

    /// Returns the remote feed timeout in seconds. Defaults to 30 if unset.
    pub fn fetch_timeout_secs_or_default(&self) -> u64 {
        self.fetch_timeout_secs
            .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS)
    }
}
