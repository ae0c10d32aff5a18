//! File system document store

use crate::domain::ExtensionSet;
use crate::error::{FigmdError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Abstract access to the documents being rewritten
pub trait DocumentStore {
    /// Check whether a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Read a whole document as UTF-8
    fn read(&self, path: &Path) -> Result<String>;

    /// Overwrite a document with new content
    fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// List candidate files below `root` whose names match `extensions`
    fn candidates(&self, root: &Path, extensions: &ExtensionSet) -> Result<Vec<PathBuf>>;
}

/// Plain `std::fs` implementation of DocumentStore
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemStore;

impl FileSystemStore {
    pub fn new() -> Self {
        FileSystemStore
    }
}

impl DocumentStore for FileSystemStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| FigmdError::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).map_err(|source| FigmdError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn candidates(&self, root: &Path, extensions: &ExtensionSet) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(FigmdError::NotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(FigmdError::NotADirectory(root.to_path_buf()));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("Skipping unreadable entry: {}", err);
                    continue;
                }
            };
            // Links to files count; links to directories are not descended.
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }

            if extensions.matches_path(entry.path()) {
                files.push(entry.into_path());
            } else {
                debug!("Ignoring {}", entry.path().display());
            }
        }

        Ok(files)
    }
}
