//! Playlist reading, bundling and album creation

pub mod album;
pub mod bundle;
pub mod collector;
pub mod duration;
pub mod error;
pub mod model;
pub mod query;
pub mod writer;

pub use bundle::{BundleConfig, build_bundle, load_songs, resolve_playlist_dir};
pub use duration::is_parsable_duration;
pub use model::Song;
pub use query::{SortOrder, filter_songs, sort_songs};
pub use writer::{format_song_line, write_album};
