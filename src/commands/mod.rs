//! Command dispatch and handlers.

pub mod buildings;
pub mod path;
pub mod session;

use log::LevelFilter;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// Configuration comes from the environment (and `.env`), overridden by
/// the global flags. With `--record`, every service call is written to a
/// cassette when the command finishes; with `--replay`, calls are answered
/// from one.
///
/// # Errors
///
/// Returns an error string if configuration is invalid or the selected
/// command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    init_logging(cli.verbose);

    let config = config_for(cli)?;
    let ctx = if let Some(path) = &cli.replay {
        ServiceContext::replaying(config, path)?
    } else if let Some(path) = &cli.record {
        ServiceContext::recording(config, path)
    } else {
        ServiceContext::live(config)
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;

    runtime.block_on(dispatch_with_context(&cli.command, &ctx))
}

/// Dispatch a command with the given service context.
async fn dispatch_with_context(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    match command {
        Command::Buildings { json } => buildings::run(ctx, *json).await,
        Command::Path { start, end, json } => path::run(ctx, start, end, *json).await,
        Command::Session { script } => session::run(ctx, script).await,
    }
}

/// Layer the CLI overrides on top of the environment configuration.
fn config_for(cli: &Cli) -> Result<Config, String> {
    let mut config = Config::from_env().map_err(|e| e.to_string())?;
    if let Some(server) = &cli.server {
        config = config.with_server_url(server);
    }
    if let Some(width) = cli.square_width {
        config = config.with_square_width(width);
    }
    Ok(config)
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // A logger may already be installed (tests, embedding callers).
    let _ = colog::default_builder().filter_level(level).try_init();
}
