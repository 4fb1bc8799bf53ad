//! CLI command handlers

use anyhow::{Context, Result};
use clap_complete::generate;
use colored::Colorize;
use dialoguer::Input;
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::playlist::bundle::BundleSummary;
use crate::playlist::{
    self, BundleConfig, Song, SortOrder, format_song_line, is_parsable_duration,
    resolve_playlist_dir,
};

/// Handle the `build` command (also the default with no subcommand)
pub fn build(playlist_dir: Option<String>, out: Option<PathBuf>) -> Result<()> {
    let defaults = BundleConfig::default();
    let config = BundleConfig {
        playlist_dir: resolve_playlist_dir(playlist_dir.as_deref()),
        output_file: out.unwrap_or(defaults.output_file),
        ..defaults
    };

    let summary = playlist::build_bundle(&config)?;

    info!("Bundled {} album(s)", summary.album_count);
    println!("{}", summary_line(&summary));

    Ok(())
}

/// The one line `build` prints on success
fn summary_line(summary: &BundleSummary) -> String {
    format!(
        "Wrote {} songs to {}",
        summary.song_count,
        summary.output_file.display()
    )
}

/// Handle the `list` command
pub fn list(
    album: Option<String>,
    artist: Option<String>,
    title_prefix: Option<String>,
    sort: SortOrder,
    playlist_dir: Option<String>,
    recursive: bool,
) -> Result<()> {
    let dir = resolve_playlist_dir(playlist_dir.as_deref());
    let songs = playlist::load_songs(&dir, playlist::bundle::DEFAULT_EXTENSION, recursive)
        .context("Failed to load playlist")?;

    let mut songs = playlist::filter_songs(
        songs,
        album.as_deref(),
        artist.as_deref(),
        title_prefix.as_deref(),
    );
    playlist::sort_songs(&mut songs, sort);

    if songs.is_empty() {
        println!("{}", "No songs found.".yellow());
        return Ok(());
    }

    let (header, rows) = song_table(&songs);
    println!("{}", header.bold());
    println!("{}", "-".repeat(header.chars().count()));
    for row in rows {
        println!("{}", row);
    }
    println!();
    println!("Total songs: {}", songs.len().to_string().green());

    Ok(())
}

/// Fixed-width header and rows for the `list` output
fn song_table(songs: &[Song]) -> (String, Vec<String>) {
    let header = format!(
        "{:<35} | {:<5} | {:<35} | {:<25} | {:<8}",
        "Album", "#", "Title", "Artist", "Duration"
    );
    let rows = songs
        .iter()
        .map(|song| {
            format!(
                "{:<35} | {:<5} | {:<35} | {:<25} | {:<8}",
                song.album_name, song.track_number, song.title, song.artist, song.duration
            )
        })
        .collect();
    (header, rows)
}

/// Handle the `add-album` command
pub fn add_album(name: String, playlist_dir: Option<String>) -> Result<()> {
    if name.trim().is_empty() {
        anyhow::bail!("Album name is required for add-album command.");
    }

    let dir = resolve_playlist_dir(playlist_dir.as_deref());
    let lines = prompt_for_songs()?;
    if lines.is_empty() {
        anyhow::bail!("Album must contain at least one song.");
    }

    let path = playlist::write_album(&dir, &name, &lines).context("Failed to save album")?;

    println!("{} {}", "Album saved:".green().bold(), path.display());
    Ok(())
}

/// Ask for songs until an empty title is entered
fn prompt_for_songs() -> Result<Vec<String>> {
    println!("{}", "Enter song information. Leave the title empty to finish.".cyan());
    println!("Durations must use mm:ss or hh:mm:ss format.");

    let mut lines = Vec::new();
    loop {
        let title: String = Input::new()
            .with_prompt(format!("Title for track {} (blank to finish)", lines.len() + 1))
            .allow_empty(true)
            .interact_text()
            .context("Failed to read title")?;
        if title.trim().is_empty() {
            break;
        }

        let artist: String = Input::new()
            .with_prompt("Artist")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read artist")?;

        let duration: String = Input::new()
            .with_prompt("Duration (mm:ss or hh:mm:ss)")
            .validate_with(|input: &String| -> Result<(), &str> {
                if is_parsable_duration(input.trim()) {
                    Ok(())
                } else {
                    Err("Invalid duration. Please enter the value again.")
                }
            })
            .interact_text()
            .context("Failed to read duration")?;

        lines.push(format_song_line(&title, &artist, &duration));
    }

    debug!("Collected {} song line(s)", lines.len());
    Ok(lines)
}

/// Handle the `completion` command
pub fn completion(shell: clap_complete::Shell) {
    let mut cmd = <super::Cli as clap::CommandFactory>::command();
    generate(shell, &mut cmd, "playbundle", &mut io::stdout());
}
