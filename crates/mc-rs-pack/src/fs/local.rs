//! `tokio::fs` backed filesystem.

use std::io;
use std::path::Path;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{FsEntry, PackFs};

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

#[async_trait]
impl PackFs for LocalFs {
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, contents).await
    }

    async fn list_entries(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
        let mut read_dir = tokio::fs::read_dir(dir).await?;
        let mut entries = Vec::new();
        while let Some(entry) = read_dir.next_entry().await? {
            let Ok(name) = entry.file_name().into_string() else {
                debug!("Skipping non-UTF-8 entry in {}", dir.display());
                continue;
            };
            // Follow symlinks so linked namespace directories are walked.
            let path = entry.path();
            let is_dir = match tokio::fs::metadata(&path).await {
                Ok(metadata) => metadata.is_dir(),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    warn!("Dangling symlink {}", path.display());
                    false
                }
                Err(e) => return Err(e),
            };
            entries.push(FsEntry { name, is_dir });
        }
        entries.sort();
        Ok(entries)
    }

    async fn empty_dir(&self, dir: &Path) -> io::Result<()> {
        match tokio::fs::remove_dir_all(dir).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
        tokio::fs::create_dir_all(dir).await
    }
}
