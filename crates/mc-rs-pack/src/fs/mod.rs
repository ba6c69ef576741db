//! The filesystem a pack is read from and written to.

mod local;
mod memory;

pub use local::LocalFs;
pub use memory::MemoryFs;

use std::io;
use std::path::Path;

use async_trait::async_trait;

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FsEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Minimal async filesystem used by discovery and the codecs.
///
/// Missing files and directories must be reported as
/// [`io::ErrorKind::NotFound`] so optional files can be told apart from
/// real failures.
#[async_trait]
pub trait PackFs: Send + Sync {
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Write a file, creating any missing parent directories first.
    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Children of `dir`, sorted by name.
    async fn list_entries(&self, dir: &Path) -> io::Result<Vec<FsEntry>>;

    /// Remove everything under `dir` and leave it as an empty directory.
    async fn empty_dir(&self, dir: &Path) -> io::Result<()>;

    async fn list_subdirectories(&self, dir: &Path) -> io::Result<Vec<String>> {
        Ok(self
            .list_entries(dir)
            .await?
            .into_iter()
            .filter(|entry| entry.is_dir)
            .map(|entry| entry.name)
            .collect())
    }
}
