//! Route drawing and map state for a campus path-finding service.
//!
//! A remote service knows the campus buildings and computes routes between
//! them. This crate turns its answers into something a map can draw: a
//! sorted building directory for the selectors, purple route legs with
//! black square markers at both ends, and a single map state that
//! accumulates routes until it is reset.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod coordinator;
pub mod directory;
pub mod error;
pub mod geometry;
pub mod marker;
pub mod ports;
pub mod state;
pub mod synth;
pub mod view;

#[cfg(test)]
mod testing;

use clap::Parser;

pub use coordinator::{FindOutcome, MapCoordinator};
pub use geometry::{Edge, PathSegment, Point, Route};
pub use state::{MapState, MapStateStore};
pub use synth::EdgeSynthesizer;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli)
}
