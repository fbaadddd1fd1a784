//! CLI command handlers

use anyhow::{Context, Result};
use clap_complete::generate;
use colored::Colorize;
use std::io;
use std::path::PathBuf;

use super::GenerateArgs;
use crate::config::{default_config_path, load_config, Config};
use crate::generate::{self as generator, Options, Outcome, RunSummary};
use crate::library::{resolve, Extensions};

/// Handle the `generate` command
///
/// Returns the run summary; the caller turns failures into the exit status.
pub fn generate_playlists(args: GenerateArgs) -> Result<RunSummary> {
    let (path, config) = read_config(args.config_file)?;

    let extensions = if !args.extensions.is_empty() {
        Extensions::new(&args.extensions)
    } else {
        config.extensions.unwrap_or_default()
    };
    if extensions.is_empty() {
        anyhow::bail!("No file extensions configured");
    }

    let action = if args.dry_run { "Checking" } else { "Generating" };
    println!(
        "{} {} playlists from {} ({})",
        action.cyan(),
        config.playlists.len(),
        path.display(),
        extensions.iter().collect::<Vec<_>>().join(" ")
    );

    let options = Options {
        extensions,
        dry_run: args.dry_run,
    };
    let summary = generator::run(&config.playlists, &options);
    print_summary(&summary, args.dry_run);
    Ok(summary)
}

/// Handle the `check` command
///
/// Returns true if every configured entry resolved.
pub fn check(config_file: Option<PathBuf>) -> Result<bool> {
    let (path, config) = read_config(config_file)?;
    println!("{} {}", "Checking".cyan(), path.display());

    let mut all_ok = true;
    for spec in &config.playlists {
        println!();
        println!("{} -> {}", spec.name.bold(), spec.output_path().display());

        if let Err(e) = spec.validate() {
            println!("  {} {}", "✗".red(), e);
            all_ok = false;
            continue;
        }
        if !spec.playlist_folder.is_dir() {
            println!(
                "  {} playlist folder missing: {}",
                "✗".red(),
                spec.playlist_folder.display()
            );
            all_ok = false;
        }

        for entry in &spec.folders_to_include {
            match resolve(&spec.music_source, entry) {
                Outcome::Success(resolved) => {
                    println!("  {} {} ({})", "✓".green(), entry, resolved.display());
                }
                Outcome::Skipped(warning) => {
                    println!("  {} {}", "⚠".yellow(), warning);
                    all_ok = false;
                }
                Outcome::Failed(e) => {
                    println!("  {} {}", "✗".red(), e);
                    all_ok = false;
                    break;
                }
            }
        }
    }

    println!();
    if all_ok {
        println!("{}", "All playlists resolve.".green().bold());
    } else {
        println!("{}", "Some entries could not be resolved.".yellow().bold());
    }
    Ok(all_ok)
}

/// Handle the `completion` command
pub fn completion(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    let mut cmd = super::Cli::command();
    generate(shell, &mut cmd, "m3ugen", &mut io::stdout());
}

/// Find and load the config file: explicit path (or `CONFIG_FILE`), then the
/// per-user default location
fn read_config(config_file: Option<PathBuf>) -> Result<(PathBuf, Config)> {
    let path = config_file.or_else(default_config_path).context(
        "No config file specified. Pass one as an argument or set CONFIG_FILE",
    )?;
    let config = load_config(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;
    Ok((path, config))
}

fn print_summary(summary: &RunSummary, dry_run: bool) {
    println!();
    for result in &summary.results {
        match &result.outcome {
            Ok(playlist) => println!(
                "  {} {} ({} tracks) -> {}",
                "✓".green(),
                result.name,
                playlist.track_count(),
                result.path.display()
            ),
            Err(e) => println!("  {} {}: {}", "✗".red(), result.name, e),
        }
    }

    let warnings: Vec<_> = summary.warnings().collect();
    if !warnings.is_empty() {
        println!();
        println!("{}", "Warnings:".yellow().bold());
        for (name, warning) in warnings {
            println!("  {}: {}", name, warning);
        }
    }

    println!();
    let verb = if dry_run { "checked" } else { "written" };
    let line = format!(
        "{} playlists {}, {} failed, {} tracks",
        summary.succeeded(),
        verb,
        summary.failed_count(),
        summary.total_tracks()
    );
    if summary.is_success() {
        println!("{}", line.green().bold());
    } else {
        println!("{}", line.red().bold());
    }
}
