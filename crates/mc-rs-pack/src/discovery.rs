//! Resource location discovery.
//!
//! Walks `<dir>/<namespace>/<base>/**` and turns every selected file back
//! into the [`ResourceLocation`] it was written from.

use std::fmt;
use std::io;
use std::path::Path;

use mc_rs_resource_location::ResourceLocation;
use tracing::{debug, warn};

use crate::error::{PackError, Result};
use crate::fs::PackFs;

/// Which files under a category directory belong to the category.
#[derive(Clone, Copy)]
pub enum Filter {
    /// Files ending in this extension; the extension is not part of the path.
    Extension(&'static str),
    /// Files accepted by the predicate; the whole relative path is kept.
    Matching(fn(&str) -> bool),
}

impl Filter {
    /// Resource path for a relative file path, if the file is selected.
    pub fn select<'a>(&self, relative: &'a str) -> Option<&'a str> {
        match self {
            Self::Extension(extension) => relative
                .strip_suffix(*extension)
                .filter(|stem| !stem.is_empty() && !stem.ends_with('/')),
            Self::Matching(predicate) => predicate(relative).then_some(relative),
        }
    }

    /// Extension appended to a resource path to get its file name.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Extension(extension) => *extension,
            Self::Matching(_) => "",
        }
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Extension(extension) => f.debug_tuple("Extension").field(extension).finish(),
            Self::Matching(_) => f.write_str("Matching(..)"),
        }
    }
}

/// Namespace directories directly under `dir`.
///
/// Names that are not valid lowercase namespaces (`MyNamespace`, `my pack`)
/// are skipped. A missing `dir` has no namespaces.
pub async fn namespaces(fs: &dyn PackFs, dir: &Path) -> Result<Vec<String>> {
    let names = match fs.list_subdirectories(dir).await {
        Ok(names) => names,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(PackError::io(dir, e)),
    };
    Ok(names
        .into_iter()
        .filter(|name| {
            let valid = ResourceLocation::is_valid_namespace(name);
            if !valid {
                debug!("Skipping non-namespace directory {}", dir.join(name).display());
            }
            valid
        })
        .collect())
}

/// Every resource location of one category, sorted.
pub async fn discover(
    fs: &dyn PackFs,
    dir: &Path,
    base: &str,
    filter: Filter,
) -> Result<Vec<ResourceLocation>> {
    let mut ids = Vec::new();
    for namespace in namespaces(fs, dir).await? {
        let root = dir.join(&namespace).join(base);
        for relative in walk(fs, &root).await? {
            let Some(path) = filter.select(&relative) else {
                continue;
            };
            match ResourceLocation::new(namespace.as_str(), path) {
                Ok(id) => ids.push(id),
                Err(e) => warn!("Skipping {}: {e}", root.join(&relative).display()),
            }
        }
    }
    ids.sort();
    Ok(ids)
}

/// Relative paths (`/`-separated) of all files below `root`.
async fn walk(fs: &dyn PackFs, root: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();
    let mut pending = vec![String::new()];
    while let Some(prefix) = pending.pop() {
        let dir = if prefix.is_empty() {
            root.to_path_buf()
        } else {
            root.join(&prefix)
        };
        let entries = match fs.list_entries(&dir).await {
            Ok(entries) => entries,
            Err(e) if prefix.is_empty() && e.kind() == io::ErrorKind::NotFound => {
                return Ok(files)
            }
            Err(e) => return Err(PackError::io(&dir, e)),
        };
        for entry in entries {
            let relative = if prefix.is_empty() {
                entry.name
            } else {
                format!("{prefix}/{}", entry.name)
            };
            if entry.is_dir {
                pending.push(relative);
            } else {
                files.push(relative);
            }
        }
    }
    files.sort();
    Ok(files)
}
