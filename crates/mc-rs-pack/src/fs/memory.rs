//! In-memory filesystem.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::{FsEntry, PackFs};

#[derive(Debug, Default)]
struct Tree {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
}

impl Tree {
    fn add_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }
}

/// A filesystem that lives entirely in memory.
///
/// Directories exist implicitly once a file is written below them, or
/// explicitly after [`PackFs::empty_dir`].
#[derive(Debug, Default)]
pub struct MemoryFs {
    tree: Mutex<Tree>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    fn tree(&self) -> MutexGuard<'_, Tree> {
        self.tree.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All stored file paths, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.tree().files.keys().cloned().collect()
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{} does not exist", path.display()),
    )
}

#[async_trait]
impl PackFs for MemoryFs {
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.tree()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path))
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut tree = self.tree();
        if tree.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("{} is a directory", path.display()),
            ));
        }
        tree.add_ancestors(path);
        tree.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    async fn list_entries(&self, dir: &Path) -> io::Result<Vec<FsEntry>> {
        let tree = self.tree();
        if !tree.dirs.contains(dir) {
            return Err(not_found(dir));
        }
        let child_name = |path: &Path| {
            (path.parent() == Some(dir))
                .then(|| path.file_name())
                .flatten()
                .and_then(|name| name.to_str())
                .map(str::to_string)
        };
        let mut entries: Vec<FsEntry> = tree
            .dirs
            .iter()
            .filter_map(|path| child_name(path).map(|name| FsEntry { name, is_dir: true }))
            .chain(tree.files.keys().filter_map(|path| {
                child_name(path).map(|name| FsEntry {
                    name,
                    is_dir: false,
                })
            }))
            .collect();
        entries.sort();
        Ok(entries)
    }

    async fn empty_dir(&self, dir: &Path) -> io::Result<()> {
        let mut tree = self.tree();
        tree.files.retain(|path, _| !path.starts_with(dir));
        tree.dirs.retain(|path| !path.starts_with(dir));
        tree.dirs.insert(dir.to_path_buf());
        tree.add_ancestors(dir);
        Ok(())
    }
}
