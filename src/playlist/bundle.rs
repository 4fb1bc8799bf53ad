//! Song bundle generation
//!
//! Reads every album under the playlist directory in sorted path order and
//! writes all songs as one compact JSON array.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::album::read_album;
use super::collector::collect_album_files;
use super::error::{PlaylistError, Result};
use super::model::Song;

/// Default playlist directory, relative to the working directory
pub const DEFAULT_PLAYLIST_DIR: &str = "playlist";

/// Default bundle location, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "public/songs.json";

/// Default album file extension
pub const DEFAULT_EXTENSION: &str = "tsv";

/// Where to read albums from and where to write the bundle
#[derive(Debug, Clone)]
pub struct BundleConfig {
    pub playlist_dir: PathBuf,
    pub output_file: PathBuf,
    /// Album file extension, matched case-insensitively
    pub extension: String,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            playlist_dir: PathBuf::from(DEFAULT_PLAYLIST_DIR),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// Result of a bundle run
#[derive(Debug, Clone)]
pub struct BundleSummary {
    pub album_count: usize,
    pub song_count: usize,
    pub output_file: PathBuf,
}

/// Use `dir` unless it is absent or blank
pub fn resolve_playlist_dir(dir: Option<&str>) -> PathBuf {
    match dir.map(str::trim) {
        Some(d) if !d.is_empty() => PathBuf::from(d),
        _ => PathBuf::from(DEFAULT_PLAYLIST_DIR),
    }
}

/// Load every song under `root`, albums in sorted path order
///
/// Subdirectories are only read when `recursive` is set.
pub fn load_songs(root: &Path, extension: &str, recursive: bool) -> Result<Vec<Song>> {
    let files = collect_album_files(root, extension, recursive)?;
    read_albums(&files)
}

fn read_albums(files: &[PathBuf]) -> Result<Vec<Song>> {
    let mut songs = Vec::new();
    for file in files {
        songs.extend(read_album(file)?);
    }
    Ok(songs)
}

/// Serialize songs as a compact JSON array
pub fn render_bundle(songs: &[Song]) -> Result<String> {
    Ok(serde_json::to_string(songs)?)
}

/// Write the bundle, creating the output directory if needed
pub fn write_bundle(output_file: &Path, songs: &[Song]) -> Result<()> {
    let content = render_bundle(songs)?;

    if let Some(parent) = output_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| PlaylistError::io(parent, e))?;
    }

    fs::write(output_file, content).map_err(|e| PlaylistError::io(output_file, e))?;

    debug!("Wrote {} songs to {}", songs.len(), output_file.display());
    Ok(())
}

/// Run the full collect, read, and write pass
pub fn build_bundle(config: &BundleConfig) -> Result<BundleSummary> {
    let files = collect_album_files(&config.playlist_dir, &config.extension, true)?;
    let songs = read_albums(&files)?;

    write_bundle(&config.output_file, &songs)?;

    Ok(BundleSummary {
        album_count: files.len(),
        song_count: songs.len(),
        output_file: config.output_file.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn config_in(root: &Path) -> BundleConfig {
        BundleConfig {
            playlist_dir: root.join("playlist"),
            output_file: root.join("public").join("songs.json"),
            ..BundleConfig::default()
        }
    }

    #[test]
    fn test_default_config() {
        let config = BundleConfig::default();
        assert_eq!(config.playlist_dir, PathBuf::from("playlist"));
        assert_eq!(config.output_file, PathBuf::from("public/songs.json"));
        assert_eq!(config.extension, "tsv");
    }

    #[test]
    fn test_resolve_playlist_dir() {
        assert_eq!(resolve_playlist_dir(None), PathBuf::from("playlist"));
        assert_eq!(resolve_playlist_dir(Some("   ")), PathBuf::from("playlist"));
        assert_eq!(resolve_playlist_dir(Some("albums")), PathBuf::from("albums"));
    }

    #[test]
    fn test_albums_are_concatenated_in_path_order() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        fs::create_dir_all(&config.playlist_dir).unwrap();
        fs::write(config.playlist_dir.join("b.tsv"), "B1\tX\t1:00\nB2\tX\t2:00\n").unwrap();
        fs::write(config.playlist_dir.join("a.tsv"), "A1\tY\t0:30\nA2\tY\t0:40\n").unwrap();

        let summary = build_bundle(&config).unwrap();
        assert_eq!(summary.album_count, 2);
        assert_eq!(summary.song_count, 4);

        let content = fs::read_to_string(&config.output_file).unwrap();
        let songs: Vec<Song> = serde_json::from_str(&content).unwrap();
        let order: Vec<(&str, u32)> = songs
            .iter()
            .map(|s| (s.album_name.as_str(), s.track_number))
            .collect();
        assert_eq!(order, vec![("a", 1), ("a", 2), ("b", 1), ("b", 2)]);
    }

    #[test]
    fn test_output_has_exactly_six_fields() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        fs::create_dir_all(&config.playlist_dir).unwrap();
        fs::write(config.playlist_dir.join("abc.tsv"), "T\tA\tbad\n").unwrap();

        build_bundle(&config).unwrap();

        let content = fs::read_to_string(&config.output_file).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        let object = value[0].as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["albumName", "artist", "duration", "durationSeconds", "title", "trackNumber"]
        );
        assert_eq!(value[0]["durationSeconds"], -1);
    }

    #[test]
    fn test_creates_nested_output_directory() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.output_file = dir.path().join("site").join("data").join("songs.json");
        fs::create_dir_all(&config.playlist_dir).unwrap();

        let summary = build_bundle(&config).unwrap();
        assert_eq!(summary.song_count, 0);
        assert_eq!(fs::read_to_string(&config.output_file).unwrap(), "[]");
    }

    #[test]
    fn test_rebuild_is_byte_identical() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let nested = config.playlist_dir.join("live");
        fs::create_dir_all(&nested).unwrap();
        fs::write(config.playlist_dir.join("one.tsv"), "A\tB\t3:00\n\nshort\tline\n").unwrap();
        fs::write(nested.join("two.TSV"), "C\tD\t1:00:00\r\n").unwrap();

        build_bundle(&config).unwrap();
        let first = fs::read(&config.output_file).unwrap();
        build_bundle(&config).unwrap();
        let second = fs::read(&config.output_file).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_playlist_dir_writes_nothing() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());

        let err = build_bundle(&config).unwrap_err();
        assert!(matches!(err, PlaylistError::DirectoryNotFound(_)));
        assert!(!config.output_file.exists());
    }

    #[test]
    fn test_load_songs_matches_bundle() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        fs::create_dir_all(&config.playlist_dir).unwrap();
        fs::write(config.playlist_dir.join("abc.tsv"), "T\tA\t1:00\n").unwrap();

        let songs = load_songs(&config.playlist_dir, "tsv", true).unwrap();
        build_bundle(&config).unwrap();

        let content = fs::read_to_string(&config.output_file).unwrap();
        assert_eq!(content, render_bundle(&songs).unwrap());
    }

    #[test]
    fn test_load_songs_recursive_flag() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path());
        let sub = config.playlist_dir.join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(config.playlist_dir.join("top.tsv"), "T\tA\t1:00\n").unwrap();
        fs::write(sub.join("nested.tsv"), "N\tB\t2:00\n").unwrap();

        let albums = |songs: Vec<Song>| -> Vec<String> {
            songs.into_iter().map(|s| s.album_name).collect()
        };

        let songs = load_songs(&config.playlist_dir, "tsv", false).unwrap();
        assert_eq!(albums(songs), vec!["top"]);

        let songs = load_songs(&config.playlist_dir, "tsv", true).unwrap();
        assert_eq!(albums(songs), vec!["nested", "top"]);
    }
}
