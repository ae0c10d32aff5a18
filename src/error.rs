//! Error types for figmd

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for figmd
#[derive(Debug, Error)]
pub enum FigmdError {
    #[error("Path does not exist: {0}")]
    NotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Invalid choice: {0}")]
    InvalidChoice(String),

    #[error("Cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl FigmdError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FigmdError::NotFound(_) | FigmdError::NotADirectory(_) => 2,
            FigmdError::InvalidChoice(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            FigmdError::NotFound(path) => {
                format!(
                    "Path does not exist: {}\n\n\
                    Suggestions:\n\
                    • Check the spelling of the path\n\
                    • Relative paths are resolved from the current directory\n\
                    • Leave the directory prompt blank to use the current directory",
                    path.display()
                )
            }
            FigmdError::NotADirectory(path) => {
                format!(
                    "Not a directory: {}\n\n\
                    Suggestions:\n\
                    • Use 'figmd file {}' to rewrite a single file",
                    path.display(),
                    path.display()
                )
            }
            FigmdError::InvalidChoice(choice) => {
                format!(
                    "Invalid choice: '{}'\n\n\
                    Valid choices:\n\
                    • 1 - rewrite a single file\n\
                    • 2 - rewrite every matching file in a directory",
                    choice
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using FigmdError
pub type Result<T> = std::result::Result<T, FigmdError>;
