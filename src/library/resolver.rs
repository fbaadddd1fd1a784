//! Case-insensitive resolution of configured folder names

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::error::PlaylistError;
use crate::generate::{Outcome, Warning};

/// Resolve `name` (a folder or file, possibly nested) under `root`.
///
/// Each path segment is matched against the real directory entries without
/// regard to case or Unicode composition, so `metal/live` finds `Metal/Live`
/// and a composed `café` finds a decomposed `Cafe\u{301}`. The returned path
/// uses the on-disk spelling. A `..` that would climb above `root` leaves the
/// entry unresolved.
pub fn resolve(root: &Path, name: &str) -> Outcome<PathBuf> {
    if !root.is_dir() {
        return Outcome::Failed(PlaylistError::SourceNotFound(root.to_path_buf()));
    }

    let unresolved = || {
        Outcome::Skipped(Warning::Unresolved {
            entry: name.to_string(),
            root: root.to_path_buf(),
        })
    };

    let mut current = root.to_path_buf();
    let mut depth = 0usize;
    for segment in segments(name) {
        if segment == ".." {
            if depth == 0 {
                return unresolved();
            }
            current.pop();
            depth -= 1;
            continue;
        }

        if !current.is_dir() {
            return unresolved();
        }

        match find_entry(&current, segment) {
            Ok(Some(found)) => {
                current = found;
                depth += 1;
            }
            Ok(None) => return unresolved(),
            Err(source) if current == root => {
                return Outcome::Failed(PlaylistError::SourceUnreadable {
                    path: current,
                    source,
                });
            }
            Err(e) => {
                return Outcome::Skipped(Warning::Unreadable {
                    path: current,
                    reason: e.to_string(),
                });
            }
        }
    }

    debug!("Resolved '{}' to {}", name, current.display());
    Outcome::Success(current)
}

/// Split a configured entry on either separator, dropping empty and `.` parts
fn segments(name: &str) -> impl Iterator<Item = &str> {
    name.split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != ".")
}

/// Find the entry in `dir` whose name equals `segment` ignoring case and
/// Unicode composition.
///
/// An exact match wins; otherwise the lexicographically smallest of the
/// folded matches is taken.
fn find_entry(dir: &Path, segment: &str) -> io::Result<Option<PathBuf>> {
    let wanted = fold(segment);
    let mut candidates = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let file_name = entry.file_name();
        let Some(entry_name) = file_name.to_str() else {
            continue;
        };
        if entry_name == segment {
            return Ok(Some(entry.path()));
        }
        if fold(entry_name) == wanted {
            candidates.push(entry_name.to_string());
        }
    }

    candidates.sort();
    Ok(candidates.into_iter().next().map(|name| dir.join(name)))
}

/// NFC then lowercase, for comparison only
fn fold(name: &str) -> String {
    name.nfc().collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn found(outcome: Outcome<PathBuf>) -> PathBuf {
        match outcome {
            Outcome::Success(path) => path,
            other => panic!("expected a path, got {:?}", other),
        }
    }

    fn library() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("Metal/Live Albums")).unwrap();
        fs::create_dir_all(dir.path().join("Jazz")).unwrap();
        fs::write(dir.path().join("Jazz/Take Five.flac"), b"").unwrap();
        dir
    }

    #[test]
    fn test_resolves_different_case() {
        let lib = library();
        let resolved = found(resolve(lib.path(), "metal"));
        assert_eq!(resolved, lib.path().join("Metal"));
    }

    #[test]
    fn test_resolves_nested_segments() {
        let lib = library();
        let resolved = found(resolve(lib.path(), "METAL/live albums"));
        assert_eq!(resolved, lib.path().join("Metal/Live Albums"));

        let resolved = found(resolve(lib.path(), "metal\\Live Albums"));
        assert_eq!(resolved, lib.path().join("Metal/Live Albums"));
    }

    #[test]
    fn test_resolves_single_file() {
        let lib = library();
        let resolved = found(resolve(lib.path(), "jazz/take five.FLAC"));
        assert_eq!(resolved, lib.path().join("Jazz/Take Five.flac"));
    }

    #[test]
    fn test_missing_entry_is_skipped() {
        let lib = library();
        match resolve(lib.path(), "Polka") {
            Outcome::Skipped(Warning::Unresolved { entry, root }) => {
                assert_eq!(entry, "Polka");
                assert_eq!(root, lib.path());
            }
            other => panic!("expected unresolved, got {:?}", other),
        }
    }

    #[test]
    fn test_segment_below_file_is_skipped() {
        let lib = library();
        let outcome = resolve(lib.path(), "Jazz/Take Five.flac/extra");
        assert!(matches!(outcome, Outcome::Skipped(Warning::Unresolved { .. })));
    }

    #[test]
    fn test_missing_root_fails() {
        let lib = library();
        let outcome = resolve(&lib.path().join("nope"), "Metal");
        assert!(matches!(outcome, Outcome::Failed(PlaylistError::SourceNotFound(_))));
    }

    #[test]
    fn test_empty_name_is_root() {
        let lib = library();
        assert_eq!(found(resolve(lib.path(), "")), lib.path());
        assert_eq!(found(resolve(lib.path(), "./")), lib.path());
    }

    #[test]
    fn test_parent_segment() {
        let lib = library();
        let resolved = found(resolve(lib.path(), "metal/../jazz"));
        assert_eq!(resolved, lib.path().join("Jazz"));
    }

    #[test]
    fn test_parent_segment_stays_inside_root() {
        let lib = library();
        for entry in ["..", "../etc", "metal/../../jazz"] {
            match resolve(lib.path(), entry) {
                Outcome::Skipped(Warning::Unresolved { entry: e, .. }) => assert_eq!(e, entry),
                other => panic!("expected unresolved for {entry}, got {:?}", other),
            }
        }
        // Climbing back to the root itself is fine
        let resolved = found(resolve(lib.path(), "metal/.."));
        assert_eq!(resolved, lib.path());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_composed_name_matches_decomposed_folder() {
        let lib = library();
        let on_disk = "Cafe\u{301} Del Mar";
        fs::create_dir(lib.path().join(on_disk)).unwrap();

        let resolved = found(resolve(lib.path(), "caf\u{e9} del mar"));
        assert_eq!(resolved, lib.path().join(on_disk));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_decomposed_name_matches_composed_file() {
        let lib = library();
        let on_disk = "Jazz/Caf\u{e9}.flac";
        fs::write(lib.path().join(on_disk), b"").unwrap();

        let resolved = found(resolve(lib.path(), "jazz/CAFE\u{301}.flac"));
        assert_eq!(resolved, lib.path().join(on_disk));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_exact_case_preferred() {
        let lib = library();
        fs::create_dir(lib.path().join("metal")).unwrap();
        fs::create_dir(lib.path().join("METAL")).unwrap();

        assert_eq!(
            found(resolve(lib.path(), "metal")),
            lib.path().join("metal")
        );
        // No exact match: smallest name wins
        assert_eq!(
            found(resolve(lib.path(), "mEtAl")),
            lib.path().join("METAL")
        );
    }
}
