//! Playlist assembly from configured folders

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::m3u::{generate_m3u, write_m3u};
use super::relative::relative_path;
use crate::config::PlaylistSpec;
use crate::error::PlaylistError;
use crate::generate::{Outcome, Warning};
use crate::library::{resolve, Collector, Extensions};

/// A fully assembled playlist, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    pub name: String,
    /// Where the `.m3u` file goes
    pub path: PathBuf,
    /// Track paths relative to the playlist folder, in output order
    pub entries: Vec<String>,
    /// Non-fatal issues met while assembling
    pub warnings: Vec<Warning>,
}

impl Playlist {
    pub fn track_count(&self) -> usize {
        self.entries.len()
    }

    /// File content in M3U format
    pub fn render(&self) -> String {
        generate_m3u(&self.entries)
    }
}

/// Insertion-ordered set of track paths; the first occurrence wins
#[derive(Debug, Default)]
struct TrackSet {
    order: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl TrackSet {
    /// Returns false if the path was already present
    fn insert(&mut self, path: PathBuf) -> bool {
        if self.seen.contains(&path) {
            return false;
        }
        self.seen.insert(path.clone());
        self.order.push(path);
        true
    }

    fn into_vec(self) -> Vec<PathBuf> {
        self.order
    }
}

/// Assemble a playlist: resolve each configured entry, collect matching
/// files, drop duplicates and relativise against the playlist folder.
///
/// Unresolvable entries and unreadable paths are recorded as warnings and
/// skipped. Only a missing config value, a missing music source or a path
/// that cannot be made relative fails the playlist.
pub fn build(spec: &PlaylistSpec, extensions: &Extensions) -> Result<Playlist, PlaylistError> {
    spec.validate()?;

    let path = spec.output_path();
    info!("Building playlist '{}' -> {}", spec.name, path.display());

    let mut tracks = TrackSet::default();
    let mut warnings = Vec::new();

    for entry in &spec.folders_to_include {
        let resolved = match resolve(&spec.music_source, entry) {
            Outcome::Success(resolved) => resolved,
            Outcome::Skipped(warning) => {
                record(&mut warnings, warning);
                continue;
            }
            Outcome::Failed(e) => return Err(e),
        };

        debug!("Searching for files inside {}", resolved.display());
        for outcome in Collector::new(&resolved, extensions) {
            match outcome {
                Outcome::Success(track) => {
                    if !tracks.insert(track) {
                        debug!("Already in playlist, skipping duplicate");
                    }
                }
                Outcome::Skipped(warning) => record(&mut warnings, warning),
                Outcome::Failed(e) => return Err(e),
            }
        }
    }

    let mut entries = Vec::new();
    for track in tracks.into_vec() {
        match playlist_line(&track, &spec.playlist_folder)? {
            Some(line) => {
                debug!("Added file to playlist: {}", line);
                entries.push(line);
            }
            None => record(&mut warnings, Warning::Unrepresentable { path: track }),
        }
    }

    Ok(Playlist {
        name: spec.name.clone(),
        path,
        entries,
        warnings,
    })
}

/// Write an assembled playlist, replacing any previous file
pub fn write(playlist: &Playlist) -> Result<(), PlaylistError> {
    write_m3u(&playlist.path, &playlist.render())?;
    info!(
        "Wrote playlist '{}' with {} tracks",
        playlist.name,
        playlist.track_count()
    );
    Ok(())
}

/// Relative path of `track` as a playlist line, or `None` if it cannot be
/// written as one
fn playlist_line(track: &Path, playlist_folder: &Path) -> Result<Option<String>, PlaylistError> {
    let relative =
        relative_path(track, playlist_folder).ok_or_else(|| PlaylistError::NoRelativePath {
            target: track.to_path_buf(),
            base: playlist_folder.to_path_buf(),
        })?;

    Ok(relative
        .into_os_string()
        .into_string()
        .ok()
        .filter(|line| !line.contains(['\n', '\r'])))
}

fn record(warnings: &mut Vec<Warning>, warning: Warning) {
    warn!("{}", warning);
    warnings.push(warning);
}
