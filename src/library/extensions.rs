//! Audio file extension filter

use std::collections::BTreeSet;
use std::path::Path;

/// Extensions included when none are configured
pub const DEFAULT_EXTENSIONS: &[&str] = &[".flac", ".mp3"];

/// Set of lowercase file extensions, stored with a leading dot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extensions {
    set: BTreeSet<String>,
}

impl Extensions {
    /// Build a set from user input, accepting `flac`, `.flac` or `.FLAC`
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = extensions
            .into_iter()
            .filter_map(|ext| normalize(ext.as_ref()))
            .collect();
        Self { set }
    }

    /// Whether the file's extension (case-insensitive) is in the set
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.set.contains(&format!(".{}", e.to_lowercase())))
            .unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.set.iter().map(String::as_str)
    }
}

impl Default for Extensions {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

fn normalize(ext: &str) -> Option<String> {
    let ext = ext.trim().trim_start_matches('.');
    if ext.is_empty() {
        return None;
    }
    Some(format!(".{}", ext.to_lowercase()))
}
