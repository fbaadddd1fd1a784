//! Playlist definitions

use std::path::PathBuf;

use crate::error::PlaylistError;
use crate::utils::playlist_file_name;

/// One configured playlist
///
/// Produced by the config loader and never modified during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistSpec {
    /// Playlist name, unique within a run
    pub name: String,
    /// Root directory of the music library
    pub music_source: PathBuf,
    /// Directory the `.m3u` file is written to
    pub playlist_folder: PathBuf,
    /// Folders or files under `music_source`, in playlist order
    pub folders_to_include: Vec<String>,
}

impl PlaylistSpec {
    pub fn new(
        name: impl Into<String>,
        music_source: impl Into<PathBuf>,
        playlist_folder: impl Into<PathBuf>,
        folders_to_include: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            music_source: music_source.into(),
            playlist_folder: playlist_folder.into(),
            folders_to_include,
        }
    }

    /// Check that every required value is present
    pub fn validate(&self) -> Result<(), PlaylistError> {
        if self.name.trim().is_empty() {
            return Err(PlaylistError::MissingField("name"));
        }
        if self.music_source.as_os_str().is_empty() {
            return Err(PlaylistError::MissingField("music_source"));
        }
        if self.playlist_folder.as_os_str().is_empty() {
            return Err(PlaylistError::MissingField("playlist_folder"));
        }
        if self.folders_to_include.is_empty() {
            return Err(PlaylistError::MissingField("folders_to_include"));
        }
        Ok(())
    }

    /// Full path of the generated playlist file
    pub fn output_path(&self) -> PathBuf {
        self.playlist_folder.join(playlist_file_name(&self.name))
    }
}

/// Clean up configured folder entries.
///
/// Surrounding whitespace and double quotes are stripped, as are leading
/// slashes so every entry stays relative to the music source. Blank entries
/// are dropped.
pub fn clean_folder_entries<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|entry| {
            let entry = entry
                .as_ref()
                .trim()
                .trim_matches('"')
                .trim_start_matches(['/', '\\']);
            (!entry.is_empty()).then(|| entry.to_string())
        })
        .collect()
}
