//! TOML configuration loading
//!
//! ```toml
//! extensions = [".flac", ".mp3"]
//!
//! [defaults]
//! music_source = "/music"
//! playlist_folder = "/playlists"
//!
//! [[playlist]]
//! name = "Rock"
//! folders_to_include = ["Metal", "Classic Rock/Live"]
//! ```

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::playlist::{clean_folder_entries, PlaylistSpec};
use crate::error::ConfigError;
use crate::library::Extensions;

/// Parsed configuration file
#[derive(Debug, Clone)]
pub struct Config {
    /// Extension filter from the file, if one was given
    pub extensions: Option<Extensions>,
    /// Playlists in the order they appear in the file
    pub playlists: Vec<PlaylistSpec>,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    extensions: Option<Vec<String>>,
    #[serde(default)]
    defaults: RawDefaults,
    #[serde(default, rename = "playlist")]
    playlists: Vec<RawPlaylist>,
}

#[derive(Debug, Default, Deserialize)]
struct RawDefaults {
    #[serde(default, alias = "musicSource")]
    music_source: Option<String>,
    #[serde(default, alias = "playListFolder", alias = "playlistFolder")]
    playlist_folder: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPlaylist {
    name: String,
    #[serde(default, alias = "musicSource")]
    music_source: Option<String>,
    #[serde(default, alias = "playListFolder", alias = "playlistFolder")]
    playlist_folder: Option<String>,
    #[serde(default, alias = "foldersToInclude")]
    folders_to_include: Option<FolderList>,
}

/// Folder entries as an array or as one entry per line
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FolderList {
    List(Vec<String>),
    Lines(String),
}

impl FolderList {
    fn into_entries(self) -> Vec<String> {
        match self {
            FolderList::List(entries) => clean_folder_entries(entries),
            FolderList::Lines(text) => clean_folder_entries(text.lines()),
        }
    }
}

/// Default config location: `<config dir>/m3ugen/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("m3ugen").join("config.toml"))
}

/// Load and parse a config file
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read config file {}", path.display());
    parse_config_str(&content)
}

/// Parse config file content
///
/// Missing per-playlist values are left empty rather than rejected; the
/// playlist they belong to fails on its own when it is built.
pub fn parse_config_str(content: &str) -> Result<Config, ConfigError> {
    let raw: RawConfig = toml::from_str(content)?;

    if raw.playlists.is_empty() {
        return Err(ConfigError::NoPlaylists);
    }

    let mut seen = HashSet::new();
    let mut playlists = Vec::with_capacity(raw.playlists.len());

    for playlist in raw.playlists {
        let name = playlist.name.trim().to_string();
        if !seen.insert(name.to_lowercase()) {
            return Err(ConfigError::DuplicatePlaylist(name));
        }

        let music_source = playlist
            .music_source
            .or_else(|| raw.defaults.music_source.clone());
        let playlist_folder = playlist
            .playlist_folder
            .or_else(|| raw.defaults.playlist_folder.clone());
        let folders = playlist
            .folders_to_include
            .map(FolderList::into_entries)
            .unwrap_or_default();

        debug!("Read playlist '{}' with {} entries", name, folders.len());
        playlists.push(PlaylistSpec::new(
            name,
            absolute_dir(music_source.as_deref())?,
            absolute_dir(playlist_folder.as_deref())?,
            folders,
        ));
    }

    Ok(Config {
        extensions: raw.extensions.map(Extensions::new),
        playlists,
    })
}

/// Strip quotes and make a configured directory absolute against the
/// working directory. Missing values stay empty.
fn absolute_dir(value: Option<&str>) -> Result<PathBuf, ConfigError> {
    let value = value.unwrap_or_default().trim().trim_matches('"');
    if value.is_empty() {
        return Ok(PathBuf::new());
    }
    std::path::absolute(value).map_err(|source| ConfigError::Path {
        path: PathBuf::from(value),
        source,
    })
}
