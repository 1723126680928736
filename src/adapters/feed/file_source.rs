//! Implements FeedSource for a feed document on the local filesystem.

use super::rss::parse_rss;
use crate::domain::{DomainError, Episode};
use crate::ports::FeedSource;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

pub struct FileFeedSource {
    path: PathBuf,
}

impl FileFeedSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl FeedSource for FileFeedSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    async fn read_episodes(&self) -> Result<Vec<Episode>, DomainError> {
        let xml = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(DomainError::Feed(format!(
                    "{} not found. Please verify the file path.",
                    self.path.display()
                )));
            }
            Err(e) => {
                return Err(DomainError::Feed(format!(
                    "read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };
        let episodes = parse_rss(&xml)?;
        info!(
            path = %self.path.display(),
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
    async fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileFeedSource::new(dir.path().join("pel.xml"));
        let err = source.read_episodes().await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("pel.xml not found. Please verify the file path."));
        assert!(matches!(err, DomainError::Feed(_)));
    }

    #[tokio::test]
    async fn test_reads_episodes_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.xml");
        std::fs::write(
            &path,
            "<rss><channel><item><title>Kant's Critique</title><link>http://x/k</link></item></channel></rss>",
        )
        .unwrap();
        let source = FileFeedSource::new(&path);
        let episodes = source.read_episodes().await.unwrap();
        assert_eq!(episodes.len(), 1);
        assert_eq!(episodes[0].title, "Kant's Critique");
        assert_eq!(source.location(), path.display().to_string());
    }
}
