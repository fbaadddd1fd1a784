//! Utility functions

mod sanitize;

pub use sanitize::playlist_file_name;
