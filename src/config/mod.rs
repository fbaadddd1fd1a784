//! Configuration: which playlists to build and from where

pub mod loader;
pub mod playlist;

pub use loader::{default_config_path, load_config, Config};
pub use playlist::PlaylistSpec;
