//! Error types for playlist generation

use std::path::PathBuf;
use thiserror::Error;

/// An error that stops one playlist from being generated.
///
/// Other playlists in the same run are unaffected.
#[derive(Error, Debug)]
pub enum PlaylistError {
    /// A required configuration value is missing or empty
    #[error("missing required value `{0}`")]
    MissingField(&'static str),

    /// The music source root does not exist or is not a directory
    #[error("music source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// The music source root exists but cannot be listed
    #[error("music source unreadable: {}: {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No relative path exists between a track and the playlist folder
    #[error("cannot express {} relative to {}", target.display(), base.display())]
    NoRelativePath { target: PathBuf, base: PathBuf },

    /// The playlist file could not be written
    #[error("failed to write playlist {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An error that prevents the configuration from being used at all.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two playlists would write to the same output file
    #[error("playlist `{0}` is configured more than once")]
    DuplicatePlaylist(String),

    #[error("config file defines no playlists")]
    NoPlaylists,

    #[error("cannot make path absolute: {}: {source}", path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
