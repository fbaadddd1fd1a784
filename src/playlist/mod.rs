//! Playlist building, relative paths and M3U output

pub mod builder;
pub mod m3u;
pub mod relative;

pub use builder::{build, write, Playlist};
