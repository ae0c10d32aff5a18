//! What a single run should rewrite

use crate::domain::ExtensionSet;
use std::path::PathBuf;

/// Target of a rewrite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// One file, regardless of its extension.
    File(PathBuf),
    /// Every file below `root` whose name matches `extensions`.
    Directory {
        root: PathBuf,
        extensions: ExtensionSet,
    },
}

/// Fully resolved options for a rewrite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteRequest {
    pub target: Target,
}

impl RewriteRequest {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        RewriteRequest {
            target: Target::File(path.into()),
        }
    }

    pub fn directory(root: impl Into<PathBuf>, extensions: ExtensionSet) -> Self {
        RewriteRequest {
            target: Target::Directory {
                root: root.into(),
                extensions,
            },
        }
    }
}
