//! Feed adapters. Implement FeedSource for local files and HTTP URLs.

pub mod file_source;
pub mod http_source;
pub mod rss;

pub use file_source::FileFeedSource;
pub use http_source::HttpFeedSource;
pub use rss::parse_rss;

use crate::domain::DomainError;
use crate::ports::FeedSource;
use std::sync::Arc;
use std::time::Duration;

/// True for locations fetched over the network.
pub fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Pick the feed adapter for `location`: HTTP(S) URLs are fetched, anything else is a file path.
pub fn feed_source_for(
    location: &str,
    timeout: Duration,
) -> Result<Arc<dyn FeedSource>, DomainError> {
    if is_remote(location) {
        Ok(Arc::new(HttpFeedSource::new(location.trim(), timeout)?))
    } else {
        Ok(Arc::new(FileFeedSource::new(location)))
    }
}
