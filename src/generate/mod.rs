//! Playlist generation across all configured playlists

pub mod orchestrator;
pub mod outcome;

pub use orchestrator::{run, Options, RunSummary};
pub use outcome::{Outcome, Warning};
