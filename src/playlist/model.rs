//! Song records produced from playlist files

use serde::{Deserialize, Serialize};

/// Duration value used when a duration string is missing or unparseable
pub const INVALID_DURATION: i64 = -1;

/// One song line of an album file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// File name of the album without its last extension
    pub album_name: String,
    /// 1-based position among the accepted lines of the album
    pub track_number: u32,
    pub title: String,
    pub artist: String,
    /// Duration text exactly as written in the file (trimmed)
    pub duration: String,
    /// Parsed duration, or [`INVALID_DURATION`]
    pub duration_seconds: i64,
}

impl Song {
    /// Whether the duration text could be parsed
    pub fn has_valid_duration(&self) -> bool {
        self.duration_seconds >= 0
    }
}
