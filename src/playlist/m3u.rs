//! M3U playlist serialisation and writing

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::debug;

use crate::error::PlaylistError;

/// Generate M3U playlist file content
///
/// One path per line, each terminated by a newline. No `#EXTM3U` header or
/// extended directives are written; an empty track list gives an empty file.
pub fn generate_m3u<S: AsRef<str>>(tracks: &[S]) -> String {
    let mut content = String::new();
    for track in tracks {
        content.push_str(track.as_ref());
        content.push('\n');
    }
    content
}

/// Replace the file at `path` with `content`.
///
/// The content goes to a temporary file in the same directory which is then
/// renamed over the target, so readers never see a half-written playlist and
/// old lines never survive. On Unix the previous file's mode is kept, or
/// `0644` for a new file.
pub fn write_m3u(path: &Path, content: &str) -> Result<(), PlaylistError> {
    let write_err = |source: io::Error| PlaylistError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut file = tempfile::Builder::new()
        .prefix(".m3ugen-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(write_err)?;

    file.write_all(content.as_bytes()).map_err(write_err)?;
    file.as_file().sync_all().map_err(write_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(path)
            .map(|m| m.permissions().mode() & 0o7777)
            .unwrap_or(0o644);
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(mode))
            .map_err(write_err)?;
    }

    file.persist(path).map_err(|e| write_err(e.error))?;

    debug!("Wrote M3U: {} ({} bytes)", path.display(), content.len());
    Ok(())
}

/// Fail the way `write_m3u` would if the destination folder is missing or
/// not writable, without touching the playlist itself
pub fn check_destination(path: &Path) -> Result<(), PlaylistError> {
    let write_err = |source: io::Error| PlaylistError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Err(write_err(io::Error::new(
            io::ErrorKind::NotFound,
            "playlist folder does not exist",
        )));
    }

    // Dropped at once, which removes it again
    tempfile::Builder::new()
        .prefix(".m3ugen-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(write_err)?;
    Ok(())
}
