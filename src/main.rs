//! m3ugen - Regenerate relative-path m3u playlists from a music library

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::OpenOptions;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod error;
mod generate;
mod library;
mod playlist;
mod utils;

use cli::{Cli, Commands};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(&cli.log_level, cli.log_file.as_deref())?;

    let command = cli.command.unwrap_or(Commands::Generate(cli.generate));
    let ok = match command {
        Commands::Generate(args) => cli::commands::generate_playlists(args)?.is_success(),
        Commands::Check { config_file } => cli::commands::check(config_file)?,
        Commands::Completion { shell } => {
            cli::commands::completion(shell);
            true
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Log to stderr, and additionally to `log_file` when given
fn init_logging(level: &str, log_file: Option<&Path>) -> Result<()> {
    let filter = format!("m3ugen={}", level.to_lowercase());

    let file_layer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(())
}
