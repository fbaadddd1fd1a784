//! Generation orchestration across playlists

use std::path::PathBuf;
use tracing::{error, info};

use super::Warning;
use crate::config::PlaylistSpec;
use crate::error::PlaylistError;
use crate::library::Extensions;
use crate::playlist::{self, m3u::check_destination, Playlist};

/// Settings shared by every playlist in a run
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub extensions: Extensions,
    /// Build playlists but do not write them
    pub dry_run: bool,
}

/// Result for one configured playlist
#[derive(Debug)]
pub struct PlaylistResult {
    pub name: String,
    /// Output file the playlist was (or would have been) written to
    pub path: PathBuf,
    pub outcome: Result<Playlist, PlaylistError>,
}

/// Result of a run
#[derive(Debug, Default)]
pub struct RunSummary {
    /// One entry per playlist, in configured order
    pub results: Vec<PlaylistResult>,
}

impl RunSummary {
    /// Number of playlists built (and written, unless dry run)
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_ok()).count()
    }

    /// Failed playlists with their reasons
    pub fn failed(&self) -> impl Iterator<Item = (&str, &PlaylistError)> {
        self.results.iter().filter_map(|r| match &r.outcome {
            Err(e) => Some((r.name.as_str(), e)),
            Ok(_) => None,
        })
    }

    pub fn failed_count(&self) -> usize {
        self.failed().count()
    }

    /// Tracks written across all successful playlists
    pub fn total_tracks(&self) -> usize {
        self.playlists().map(Playlist::track_count).sum()
    }

    /// Non-fatal issues, tagged with the playlist they belong to
    pub fn warnings(&self) -> impl Iterator<Item = (&str, &Warning)> {
        self.playlists()
            .flat_map(|p| p.warnings.iter().map(move |w| (p.name.as_str(), w)))
    }

    /// True when no playlist failed
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    fn playlists(&self) -> impl Iterator<Item = &Playlist> {
        self.results.iter().filter_map(|r| r.outcome.as_ref().ok())
    }
}

/// Generate every playlist in configured order.
///
/// A failure is recorded against its playlist and the run moves on, so
/// every playlist that can be written is written.
pub fn run(specs: &[PlaylistSpec], options: &Options) -> RunSummary {
    let mut summary = RunSummary::default();

    for spec in specs {
        let outcome = generate_one(spec, options);
        if let Err(e) = &outcome {
            error!("Failed to generate playlist {}: {}", spec.name, e);
        }
        summary.results.push(PlaylistResult {
            name: spec.name.clone(),
            path: spec.output_path(),
            outcome,
        });
    }

    info!(
        "Finished: {} playlists written, {} failed, {} tracks",
        summary.succeeded(),
        summary.failed_count(),
        summary.total_tracks()
    );
    summary
}

fn generate_one(spec: &PlaylistSpec, options: &Options) -> Result<Playlist, PlaylistError> {
    let playlist = playlist::build(spec, &options.extensions)?;
    if options.dry_run {
        check_destination(&playlist.path)?;
        info!(
            "Dry run: would write {} tracks to {}",
            playlist.track_count(),
            playlist.path.display()
        );
    } else {
        playlist::write(&playlist)?;
    }
    Ok(playlist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    fn line_count(path: &Path) -> usize {
        fs::read_to_string(path).unwrap().lines().count()
    }

    fn setup() -> (TempDir, PathBuf, PathBuf) {
        let dir = TempDir::new().unwrap();
        let music = dir.path().join("music");
        let playlists = dir.path().join("playlists");
        fs::create_dir_all(&music).unwrap();
        fs::create_dir_all(&playlists).unwrap();
        (dir, music, playlists)
    }

    fn spec(name: &str, music: &Path, playlists: &Path, folders: &[&str]) -> PlaylistSpec {
        PlaylistSpec::new(
            name,
            music,
            playlists,
            folders.iter().map(|f| f.to_string()).collect(),
        )
    }

    #[test]
    fn test_stale_entries_do_not_survive() {
        let (_dir, music, playlists) = setup();
        for i in 0..10 {
            touch(&music.join(format!("Metal/{:02}.mp3", i)));
        }
        let specs = vec![spec("Metal", &music, &playlists, &["Metal"])];
        let output = playlists.join("metal.m3u");

        let summary = run(&specs, &Options::default());
        assert!(summary.is_success());
        assert_eq!(line_count(&output), 10);

        for i in 0..8 {
            fs::remove_file(music.join(format!("Metal/{:02}.mp3", i))).unwrap();
        }
        let summary = run(&specs, &Options::default());
        assert_eq!(summary.total_tracks(), 2);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            format!("..{0}music{0}Metal{0}08.mp3\n..{0}music{0}Metal{0}09.mp3\n", std::path::MAIN_SEPARATOR)
        );
    }

    #[test]
    fn test_empty_playlist_still_written() {
        let (_dir, music, playlists) = setup();
        let output = playlists.join("empty.m3u");
        fs::write(&output, "../music/old.mp3\n").unwrap();

        let specs = vec![spec("Empty", &music, &playlists, &["Nothing Here"])];
        let summary = run(&specs, &Options::default());

        assert!(summary.is_success());
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
        run(&specs, &Options::default());
        assert_eq!(fs::read_to_string(&output).unwrap(), "");
    }

    #[test]
    fn test_failure_is_isolated_per_playlist() {
        let (dir, music, playlists) = setup();
        touch(&music.join("Jazz/a.flac"));
        touch(&music.join("Rock/b.mp3"));

        let specs = vec![
            spec("Jazz", &music, &playlists, &["Jazz"]),
            spec("Broken", &music, &dir.path().join("no-such-dir"), &["Rock"]),
            spec("NoSource", &dir.path().join("missing"), &playlists, &["Rock"]),
            spec("Rock", &music, &playlists, &["Rock"]),
        ];
        let summary = run(&specs, &Options::default());

        assert!(!summary.is_success());
        assert_eq!(summary.succeeded(), 2);
        assert_eq!(summary.total_tracks(), 2);

        let failed: Vec<_> = summary.failed().map(|(name, _)| name).collect();
        assert_eq!(failed, vec!["Broken", "NoSource"]);
        assert!(matches!(
            summary.results[1].outcome,
            Err(PlaylistError::Write { .. })
        ));
        assert!(matches!(
            summary.results[2].outcome,
            Err(PlaylistError::SourceNotFound(_))
        ));

        assert!(playlists.join("jazz.m3u").exists());
        assert!(playlists.join("rock.m3u").exists());
    }

    #[test]
    fn test_missing_entry_recorded_as_warning() {
        let (_dir, music, playlists) = setup();
        touch(&music.join("Metal/a.mp3"));
        touch(&music.join("Jazz/b.mp3"));

        let specs = vec![spec("Mixed", &music, &playlists, &["Metal", "Ghost", "Jazz"])];
        let summary = run(&specs, &Options::default());

        assert!(summary.is_success());
        assert_eq!(line_count(&playlists.join("mixed.m3u")), 2);

        let warnings: Vec<_> = summary.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].0, "Mixed");
        assert!(matches!(warnings[0].1, Warning::Unresolved { entry, .. } if entry == "Ghost"));
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let (_dir, music, playlists) = setup();
        touch(&music.join("A/Disc 1/01.flac"));
        touch(&music.join("A/Disc 2/01.flac"));
        touch(&music.join("B/x.mp3"));

        let specs = vec![
            spec("One", &music, &playlists, &["a", "b"]),
            spec("Two", &music, &playlists, &["B", "A/Disc 2"]),
        ];
        run(&specs, &Options::default());
        let first = (
            fs::read(playlists.join("one.m3u")).unwrap(),
            fs::read(playlists.join("two.m3u")).unwrap(),
        );
        run(&specs, &Options::default());
        let second = (
            fs::read(playlists.join("one.m3u")).unwrap(),
            fs::read(playlists.join("two.m3u")).unwrap(),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_extensions() {
        let (_dir, music, playlists) = setup();
        touch(&music.join("Raw/track.WAV"));
        touch(&music.join("Raw/track.mp3"));
        let specs = vec![spec("Raw", &music, &playlists, &["Raw"])];

        let summary = run(&specs, &Options::default());
        assert_eq!(summary.total_tracks(), 1);

        let options = Options {
            extensions: Extensions::new([".mp3", ".flac", ".wav"]),
            dry_run: false,
        };
        let summary = run(&specs, &options);
        assert_eq!(summary.total_tracks(), 2);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let (dir, music, playlists) = setup();
        touch(&music.join("Metal/a.mp3"));

        let options = Options {
            dry_run: true,
            ..Options::default()
        };
        let specs = vec![
            spec("Metal", &music, &playlists, &["Metal"]),
            spec("Nowhere", &music, &dir.path().join("absent"), &["Metal"]),
        ];
        let summary = run(&specs, &options);

        assert_eq!(summary.succeeded(), 1);
        assert_eq!(summary.total_tracks(), 1);
        assert_eq!(summary.failed_count(), 1);
        assert!(!playlists.join("metal.m3u").exists());
    }
}
