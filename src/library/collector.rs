//! Recursive audio file discovery

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::Extensions;
use crate::generate::{Outcome, Warning};

/// Lazily walks one resolved path, yielding matching audio files.
///
/// Directory entries are visited depth-first in file-name order, so the same
/// tree always produces the same sequence. A path that is itself a file
/// yields at most that file. Symbolic links below the starting path are not
/// followed and come out as `Skipped`, as do subtrees that cannot be read.
/// AppleDouble companions (`._name`) are resource forks, never tracks.
///
/// The traversal is single-use: build a new collector to walk again.
pub struct Collector<'a> {
    walker: walkdir::IntoIter,
    extensions: &'a Extensions,
}

impl<'a> Collector<'a> {
    pub fn new(path: &Path, extensions: &'a Extensions) -> Self {
        let walker = WalkDir::new(path)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();
        Self { walker, extensions }
    }
}

impl Iterator for Collector<'_> {
    type Item = Outcome<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_default();
                    let reason = match e.io_error() {
                        Some(io) => io.to_string(),
                        None => e.to_string(),
                    };
                    return Some(Outcome::Skipped(Warning::Unreadable { path, reason }));
                }
            };

            // The starting path itself may be a link; it was chosen explicitly
            if entry.path_is_symlink() && entry.depth() > 0 {
                return Some(Outcome::Skipped(Warning::Symlink {
                    path: entry.into_path(),
                }));
            }

            if !entry.file_type().is_file() {
                continue;
            }

            if is_apple_double(entry.path()) {
                continue;
            }

            if self.extensions.matches(entry.path()) {
                return Some(Outcome::Success(entry.into_path()));
            }
        }
    }
}

fn is_apple_double(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.starts_with("._"))
}
