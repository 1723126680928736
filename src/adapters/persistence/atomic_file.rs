//! Atomic artifact writes using the write-replace pattern.
//!
//! 1. Write to a sibling temp file
//! 2. sync_all() to flush to disk
//! 3. Rename over the target
//!
//! A crash mid-write leaves the previous artifact intact.

use std::io;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub async fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let mut temp_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "artifact".into());
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let mut f = fs::File::create(&temp_path).await?;
    f.write_all(contents).await?;
    f.sync_all().await?;
    drop(f);

    fs::rename(&temp_path, path).await
}
