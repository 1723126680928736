//! Implements FeedSource over HTTP(S). One GET per run, no retries.

use super::rss::parse_rss;
use crate::domain::{DomainError, Episode};
use crate::ports::FeedSource;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

pub struct HttpFeedSource {
    client: Client,
    url: String,
}

impl HttpFeedSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pel-map/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::Feed(format!("HTTP client: {}", e)))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait::async_trait]
impl FeedSource for HttpFeedSource {
    fn location(&self) -> String {
        self.url.clone()
    }

    async fn read_episodes(&self) -> Result<Vec<Episode>, DomainError> {
        info!(url = %self.url, "fetching feed");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DomainError::Feed(format!("fetch {}: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Feed(format!(
                "fetch {}: HTTP {}",
                self.url, status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Feed(format!("read body of {}: {}", self.url, e)))?;
        let episodes = parse_rss(&body)?;
        info!(
            url = %self.url,
            count = episodes.len(),
            "Found {} items in feed",
            episodes.len()
        );
        Ok(episodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_is_feed_error() {
        let url = "http://127.0.0.1:1/feed.xml";
        let source = HttpFeedSource::new(url, Duration::from_secs(2)).unwrap();
        assert_eq!(source.location(), url);

        let err = source.read_episodes().await.unwrap_err();
        match err {
            DomainError::Feed(msg) => assert!(msg.starts_with("fetch http://127.0.0.1:1/feed.xml")),
            other => panic!("expected feed error, got {:?}", other),
        }
    }
}
