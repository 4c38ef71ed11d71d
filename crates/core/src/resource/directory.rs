use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

use super::traits::ResourceSource;
use crate::error::{CatalogError, Result};

/// Resources stored as files below a directory on disk.
///
/// Names are paths relative to the root with `/` separators, sorted
/// lexicographically so that id collisions between files resolve the same
/// way on every platform.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn relative_name(&self, path: &Path) -> String {
        resource_name(path.strip_prefix(&self.root).unwrap_or(path))
    }

    fn discovery_error(&self, reason: impl Into<String>) -> CatalogError {
        CatalogError::Discovery {
            root: self.location(),
            reason: reason.into(),
        }
    }
}

impl ResourceSource for DirectorySource {
    fn location(&self) -> String {
        self.root.display().to_string()
    }

    fn list(&self) -> Result<Vec<String>> {
        let meta = fs::metadata(&self.root).map_err(|e| self.discovery_error(e.to_string()))?;
        if !meta.is_dir() {
            return Err(self.discovery_error("not a directory"));
        }

        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(self.discovery_error(err.to_string()));
                }
                Err(err) => {
                    warn!(
                        location = %self.location(),
                        error = %err,
                        "Unreadable entry under DACG resource root"
                    );
                    // Still listed, so opening it fails and the loader skips just this resource
                    if let (Some(path), None) = (err.path(), err.loop_ancestor()) {
                        names.push(self.relative_name(path));
                    }
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            names.push(self.relative_name(entry.path()));
        }
        names.sort();
        Ok(names)
    }

    fn open(&self, name: &str) -> Result<Box<dyn Read + Send + '_>> {
        let path = self.root.join(name);
        let file = File::open(&path).map_err(|source| CatalogError::Stream {
            resource: name.to_string(),
            source,
        })?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Join path components with `/` regardless of the host separator
fn resource_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
