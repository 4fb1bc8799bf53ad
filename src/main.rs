//! playbundle - Bundle tab-separated playlist files into a JSON file

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod playlist;
mod utils;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Quiet by default so stdout only carries command output
    let filter = if cli.verbose {
        "playbundle=debug"
    } else {
        "playbundle=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        None => {
            cli::commands::build(None, None)?;
        }
        Some(Commands::Build { playlist, out }) => {
            cli::commands::build(playlist, out)?;
        }
        Some(Commands::List {
            album,
            artist,
            title_prefix,
            sort,
            playlist,
            recursive,
        }) => {
            cli::commands::list(album, artist, title_prefix, sort, playlist, recursive)?;
        }
        Some(Commands::AddAlbum { name, playlist }) => {
            cli::commands::add_album(name, playlist)?;
        }
        Some(Commands::Completion { shell }) => {
            cli::commands::completion(shell);
        }
    }

    Ok(())
}
