//! Binary entrypoint for the `campus-paths` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Logging is installed in commands::dispatch once -v has been parsed.
    match campus_paths::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
