//! Album file creation

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::bundle::DEFAULT_EXTENSION;
use super::error::{PlaylistError, Result};
use crate::utils::sanitize_filename;

/// Format one album line as `Title<TAB>Artist<TAB>Duration`
pub fn format_song_line(title: &str, artist: &str, duration: &str) -> String {
    [title.trim(), artist.trim(), duration.trim()].join("\t")
}

/// Create a new album file in `dir`
///
/// The directory is created if missing. An existing album with the same
/// sanitized name is never overwritten. Returns the path of the new file.
pub fn write_album(dir: &Path, album_name: &str, lines: &[String]) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| PlaylistError::io(dir, e))?;
    }
    if !dir.is_dir() {
        return Err(PlaylistError::NotADirectory(dir.to_path_buf()));
    }

    let safe_name = sanitize_filename(album_name);
    if safe_name.is_empty() {
        return Err(PlaylistError::EmptyAlbumName);
    }

    let path = dir.join(format!("{}.{}", safe_name, DEFAULT_EXTENSION));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::AlreadyExists => PlaylistError::AlbumExists(path.clone()),
            _ => PlaylistError::io(&path, e),
        })?;

    let mut content = lines.join("\n");
    content.push('\n');
    file.write_all(content.as_bytes())
        .map_err(|e| PlaylistError::io(&path, e))?;

    debug!("Wrote album {} ({} lines)", path.display(), lines.len());
    Ok(path)
}
