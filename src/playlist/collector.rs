//! Album file discovery

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::error::{PlaylistError, Result};

/// Check whether a file name ends in `.{extension}`, ignoring case
///
/// `extension` may be given with or without its leading dot. Hidden files
/// are not special: `.tsv` itself matches.
pub(crate) fn has_extension(path: &Path, extension: &str) -> bool {
    let suffix = format!(".{}", extension.trim().trim_start_matches('.').to_lowercase());
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(&suffix))
        .unwrap_or(false)
}

/// Collect every regular file under `root` with the given extension
///
/// With `recursive` unset only the files directly inside `root` are
/// considered. Paths are absolute and sorted by their full path string so
/// that album order is the same on every run.
pub fn collect_album_files(
    root: &Path,
    extension: &str,
    recursive: bool,
) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(PlaylistError::DirectoryNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(PlaylistError::NotADirectory(root.to_path_buf()));
    }

    let root = std::path::absolute(root).map_err(|e| PlaylistError::io(root, e))?;

    let mut walker = WalkDir::new(&root);
    // Non-recursive = only the root directory.
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && has_extension(entry.path(), extension) {
            files.push(entry.into_path());
        }
    }

    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    debug!("Found {} album files under {}", files.len(), root.display());
    Ok(files)
}
