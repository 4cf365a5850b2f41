//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::marker::MAX_SQUARE_WIDTH;

/// Top-level CLI parser for `campus-paths`.
#[derive(Debug, Parser)]
#[command(name = "campus-paths", version, about = "Draw campus routes from a path-finding service")]
pub struct Cli {
    /// Campus service base URL (overrides `CAMPUS_PATHS_SERVER`).
    #[arg(long, global = true, value_name = "URL")]
    pub server: Option<String>,

    /// Side length of endpoint markers (overrides `CAMPUS_PATHS_SQUARE_WIDTH`).
    #[arg(
        long,
        global = true,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_SQUARE_WIDTH))
    )]
    pub square_width: Option<u32>,

    /// Increase log verbosity (repeatable).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Record every service call to this cassette file.
    #[arg(long, global = true, value_name = "FILE", conflicts_with = "replay")]
    pub record: Option<PathBuf>,

    /// Answer service calls from this cassette file instead of the network.
    #[arg(long, global = true, value_name = "FILE")]
    pub replay: Option<PathBuf>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the building directory, sorted by name.
    Buildings {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Find and draw the route between two buildings.
    Path {
        /// Short name of the starting building.
        start: String,
        /// Short name of the ending building.
        end: String,
        /// Print the map view as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Replay a YAML script of select/find/reset actions and print the final map.
    Session {
        /// Path to the script.
        script: PathBuf,
    },
}
