//! Rewrite use case

use crate::domain::{translate_figures, ExtensionSet, RewriteRequest, Target};
use crate::error::{FigmdError, Result};
use crate::infrastructure::DocumentStore;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What happened to one file.
#[derive(Debug)]
pub enum FileOutcome {
    Changed { replacements: usize },
    Unchanged,
    Failed(FigmdError),
}

#[derive(Debug)]
pub struct FileRecord {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

/// Per-file results of a run, in processing order.
#[derive(Debug, Default)]
pub struct RewriteReport {
    pub records: Vec<FileRecord>,
}

impl RewriteReport {
    pub fn scanned_files(&self) -> usize {
        self.records.len()
    }

    pub fn changed_files(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, FileOutcome::Changed { .. }))
            .count()
    }

    pub fn failed_files(&self) -> usize {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, FileOutcome::Failed(_)))
            .count()
    }

    pub fn total_replacements(&self) -> usize {
        self.records
            .iter()
            .map(|r| match r.outcome {
                FileOutcome::Changed { replacements } => replacements,
                _ => 0,
            })
            .sum()
    }
}

/// Drives the translator over files reached through a [`DocumentStore`].
pub struct RewriteService<S> {
    store: S,
}

impl<S: DocumentStore> RewriteService<S> {
    pub fn new(store: S) -> Self {
        RewriteService { store }
    }

    /// Execute a request. Only a missing or unusable top-level path is an error;
    /// per-file problems are recorded in the report.
    pub fn execute(&self, request: &RewriteRequest) -> Result<RewriteReport> {
        match &request.target {
            Target::File(path) => {
                if !self.store.exists(path) {
                    return Err(FigmdError::NotFound(path.clone()));
                }
                Ok(RewriteReport {
                    records: vec![self.rewrite_file(path)],
                })
            }
            Target::Directory { root, extensions } => self.rewrite_tree(root, extensions),
        }
    }

    /// Rewrite every matching file below `root`.
    pub fn rewrite_tree(&self, root: &Path, extensions: &ExtensionSet) -> Result<RewriteReport> {
        let candidates = self.store.candidates(root, extensions)?;
        info!(
            "Found {} candidate file(s) under {} matching {}",
            candidates.len(),
            root.display(),
            extensions
        );

        let records = candidates
            .iter()
            .map(|path| self.rewrite_file(path))
            .collect();

        Ok(RewriteReport { records })
    }

    /// Rewrite a single file in place when its content changes.
    pub fn rewrite_file(&self, path: &Path) -> FileRecord {
        let outcome = match self.rewrite_contents(path) {
            Ok(outcome) => outcome,
            Err(err) => {
                debug!("{} failed: {}", path.display(), err);
                FileOutcome::Failed(err)
            }
        };

        FileRecord {
            path: path.to_path_buf(),
            outcome,
        }
    }

    fn rewrite_contents(&self, path: &Path) -> Result<FileOutcome> {
        let content = self.store.read(path)?;
        let result = translate_figures(&content);

        if !result.is_changed() {
            debug!("{} has no figure shortcodes", path.display());
            return Ok(FileOutcome::Unchanged);
        }

        self.store.write(path, &result.content)?;
        debug!(
            "{} rewritten with {} replacement(s)",
            path.display(),
            result.replacements
        );

        Ok(FileOutcome::Changed {
            replacements: result.replacements,
        })
    }
}
