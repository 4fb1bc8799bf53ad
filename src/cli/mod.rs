//! CLI module for playbundle

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::playlist::SortOrder;

pub mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "playbundle",
    about = "Bundle tab-separated playlist files into a JSON file",
    long_about = "Bundle tab-separated playlist files into a JSON file.\n\n\
                  Without a subcommand, reads ./playlist and writes ./public/songs.json."
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write every song in the playlist directory to a JSON bundle (default)
    Build {
        /// Playlist directory to read albums from
        #[arg(long, value_name = "DIR")]
        playlist: Option<String>,

        /// JSON file to write
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// List songs in the playlist
    List {
        /// Only albums whose name contains this text
        #[arg(long)]
        album: Option<String>,

        /// Only songs whose artist contains this text
        #[arg(long)]
        artist: Option<String>,

        /// Only songs whose title starts with this text
        #[arg(long)]
        title_prefix: Option<String>,

        /// Sort order
        #[arg(long, value_enum, default_value_t = SortOrder::Album)]
        sort: SortOrder,

        /// Playlist directory to read albums from
        #[arg(long, value_name = "DIR")]
        playlist: Option<String>,

        /// Include albums in subdirectories
        #[arg(long)]
        recursive: bool,
    },

    /// Create a new album interactively
    AddAlbum {
        /// Album name (used as the file name)
        #[arg(long)]
        name: String,

        /// Playlist directory to create the album in
        #[arg(long, value_name = "DIR")]
        playlist: Option<String>,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["playbundle"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_list_arguments() {
        let cli = Cli::try_parse_from([
            "playbundle",
            "list",
            "--artist",
            "band",
            "--sort",
            "duration",
            "-v",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Some(Commands::List {
                artist,
                sort,
                album,
                recursive,
                ..
            }) => {
                assert_eq!(artist.as_deref(), Some("band"));
                assert_eq!(sort, SortOrder::Duration);
                assert!(album.is_none());
                assert!(!recursive);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_list_recursive_flag() {
        let cli = Cli::try_parse_from(["playbundle", "list", "--recursive"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::List { recursive: true, .. })
        ));
    }

    #[test]
    fn test_add_album_requires_name() {
        assert!(Cli::try_parse_from(["playbundle", "add-album"]).is_err());
    }
}
