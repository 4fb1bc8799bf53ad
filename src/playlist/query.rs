//! Filtering and ordering for the `list` command

use std::cmp::Ordering;

use super::model::Song;

/// How `list` orders songs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SortOrder {
    /// Album name, then track number
    #[default]
    Album,
    /// Shortest first, unknown durations last
    Duration,
}

/// Trim and lower-case a filter; blank filters are treated as absent
fn normalize(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

/// Keep songs whose album and artist contain, and title starts with, the given filters
pub fn filter_songs(
    songs: Vec<Song>,
    album: Option<&str>,
    artist: Option<&str>,
    title_prefix: Option<&str>,
) -> Vec<Song> {
    let album = normalize(album);
    let artist = normalize(artist);
    let title_prefix = normalize(title_prefix);

    songs
        .into_iter()
        .filter(|song| {
            album
                .as_ref()
                .is_none_or(|a| song.album_name.trim().to_lowercase().contains(a.as_str()))
        })
        .filter(|song| {
            artist
                .as_ref()
                .is_none_or(|a| song.artist.trim().to_lowercase().contains(a.as_str()))
        })
        .filter(|song| {
            title_prefix
                .as_ref()
                .is_none_or(|p| song.title.trim().to_lowercase().starts_with(p.as_str()))
        })
        .collect()
}

fn compare_album(a: &Song, b: &Song) -> Ordering {
    a.album_name
        .to_lowercase()
        .cmp(&b.album_name.to_lowercase())
        .then(a.track_number.cmp(&b.track_number))
}

/// Unknown durations sort after every known one
fn duration_key(song: &Song) -> i64 {
    if song.has_valid_duration() {
        song.duration_seconds
    } else {
        i64::MAX
    }
}

/// Sort songs in place (stable)
pub fn sort_songs(songs: &mut [Song], order: SortOrder) {
    match order {
        SortOrder::Album => songs.sort_by(compare_album),
        SortOrder::Duration => songs.sort_by(|a, b| {
            duration_key(a)
                .cmp(&duration_key(b))
                .then_with(|| compare_album(a, b))
        }),
    }
}
