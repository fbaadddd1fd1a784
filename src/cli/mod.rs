//! CLI module for m3ugen

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

#[derive(Parser, Debug)]
#[command(name = "m3ugen", about = "Generate relative-path m3u playlists from a config file")]
#[command(version, author, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments for the default `generate` command
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Log level (trace, debug, info, warn, error); RUST_LOG overrides it
    #[arg(
        short,
        long,
        global = true,
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        ignore_case = true
    )]
    pub log_level: String,

    /// Also append log output to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Path to the configuration file
    #[arg(value_name = "CONFIG_FILE", env = "CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// File extensions to include (default: .flac .mp3)
    #[arg(short = 'e', long = "ext", value_name = "EXT", num_args = 1..)]
    pub extensions: Vec<String>,

    /// Build playlists and report them without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate every configured playlist (the default)
    Generate(GenerateArgs),

    /// Resolve every configured folder without writing anything
    Check {
        /// Path to the configuration file
        #[arg(value_name = "CONFIG_FILE", env = "CONFIG_FILE")]
        config_file: Option<PathBuf>,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}
