//! Album file reading
//!
//! Each non-blank line of an album file is `Title<TAB>Artist<TAB>Duration`.
//! Lines with fewer than three fields are dropped without consuming a track
//! number; bad durations are kept with the invalid sentinel.

use std::path::Path;

use tracing::{debug, trace};

use super::duration::parse_duration;
use super::error::{PlaylistError, Result};
use super::model::Song;

/// Derive the album name from a file path by stripping its last extension
///
/// The extension is only removed when the last `.` is not the first
/// character, so `.tsv` stays `.tsv` and `archive.tar.tsv` becomes
/// `archive.tar`.
pub fn album_name_from_path(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match file_name.rfind('.') {
        Some(index) if index > 0 => file_name[..index].to_string(),
        _ => file_name,
    }
}

/// Parse album file contents into songs with sequential track numbers
pub fn parse_album(album_name: &str, content: &str) -> Vec<Song> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut songs = Vec::new();
    let mut track_number = 1;

    for (line_number, raw) in content.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw).trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 3 {
            trace!(
                "Skipping line {} of {}: {} field(s)",
                line_number + 1,
                album_name,
                fields.len()
            );
            continue;
        }

        let field = |i: usize| fields.get(i).map(|f| f.trim()).unwrap_or_default().to_string();
        let duration = field(2);

        songs.push(Song {
            album_name: album_name.to_string(),
            track_number,
            title: field(0),
            artist: field(1),
            duration_seconds: parse_duration(&duration),
            duration,
        });
        track_number += 1;
    }

    songs
}

/// Read one album file into songs
pub fn read_album(path: &Path) -> Result<Vec<Song>> {
    let bytes = std::fs::read(path).map_err(|e| PlaylistError::io(path, e))?;
    let content = String::from_utf8_lossy(&bytes);

    let album_name = album_name_from_path(path);
    let songs = parse_album(&album_name, &content);

    debug!("Read {} songs from album '{}'", songs.len(), album_name);
    Ok(songs)
}
