//! File-name suffix filter used when walking a directory.

use std::fmt;
use std::path::Path;

/// Suffixes processed when none are given.
pub const DEFAULT_EXTENSIONS: [&str; 3] = [".md", ".markdown", ".txt"];

/// A normalized set of file-name suffixes.
///
/// Every entry starts with a `.` and is stored lowercase, so matching is
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    suffixes: Vec<String>,
}

impl ExtensionSet {
    /// Build a set from arbitrary entries, normalizing each one.
    ///
    /// Blank entries are dropped. An empty result falls back to the defaults.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut suffixes: Vec<String> = Vec::new();
        for entry in entries {
            let Some(suffix) = normalize_suffix(entry.as_ref()) else {
                continue;
            };
            if !suffixes.contains(&suffix) {
                suffixes.push(suffix);
            }
        }

        if suffixes.is_empty() {
            return Self::default();
        }

        ExtensionSet { suffixes }
    }

    /// Parse a comma-separated list such as `md, .TXT,rst`.
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// Whether a file name ends with one of the suffixes, ignoring case.
    pub fn matches(&self, file_name: &str) -> bool {
        let name = file_name.to_lowercase();
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }

    /// Same as [`ExtensionSet::matches`] for the final component of a path.
    pub fn matches_path(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.matches(name))
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        ExtensionSet {
            suffixes: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffixes.join(","))
    }
}

fn normalize_suffix(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "." {
        return None;
    }

    let lowered = trimmed.to_lowercase();
    if lowered.starts_with('.') {
        Some(lowered)
    } else {
        Some(format!(".{}", lowered))
    }
}
