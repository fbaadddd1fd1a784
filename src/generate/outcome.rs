//! Success / skipped / failed results threaded through every stage

use std::fmt;
use std::path::PathBuf;

use crate::error::PlaylistError;

/// Result of one unit of work (resolving an entry, visiting a path).
///
/// `Skipped` carries a non-fatal issue: the caller records it and moves on.
/// `Failed` is fatal to the playlist being built.
#[derive(Debug)]
pub enum Outcome<T> {
    Success(T),
    Skipped(Warning),
    Failed(PlaylistError),
}

/// A non-fatal issue recorded while building a playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A configured folder or file has no case-insensitive match on disk
    Unresolved { entry: String, root: PathBuf },
    /// A path could not be read while resolving or walking
    Unreadable { path: PathBuf, reason: String },
    /// Symbolic links are never followed below a configured entry
    Symlink { path: PathBuf },
    /// The path is not UTF-8 or contains a line break, so it cannot be a
    /// playlist line
    Unrepresentable { path: PathBuf },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::Unresolved { entry, root } => {
                write!(f, "'{}' not found under {}, skipping", entry, root.display())
            }
            Warning::Unreadable { path, reason } => {
                write!(f, "cannot read {}: {}, skipping", path.display(), reason)
            }
            Warning::Symlink { path } => {
                write!(f, "{} is a symbolic link, skipping", path.display())
            }
            Warning::Unrepresentable { path } => {
                write!(f, "{} cannot be written as a playlist line, skipping", path.display())
            }
        }
    }
}
