use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaylistError {
    #[error("playlist directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("playlist path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("album already exists: {}", .0.display())]
    AlbumExists(PathBuf),

    #[error("album name is empty after removing unsafe characters")]
    EmptyAlbumName,

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk playlist directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to serialize songs: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlaylistError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlaylistError>;
