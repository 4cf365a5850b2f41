//! `campus-paths buildings` command.

use std::fmt::Write;

use crate::context::ServiceContext;
use crate::coordinator::MapCoordinator;
use crate::directory::BuildingEntry;

/// Execute the `buildings` command.
///
/// Prints the directory exactly as the selectors would show it: the
/// sentinel first, then buildings sorted by name.
///
/// # Errors
///
/// Returns an error string if the directory cannot be loaded.
pub async fn run(ctx: &ServiceContext, json: bool) -> Result<(), String> {
    let coordinator = MapCoordinator::new(ctx);
    coordinator
        .load_directory()
        .await
        .map_err(|e| format!("Failed to load building directory: {e}"))?;
    let directory = coordinator.directory();

    if json {
        let out = serde_json::to_string_pretty(directory.entries())
            .map_err(|e| format!("Failed to serialize directory: {e}"))?;
        println!("{out}");
    } else {
        print!("{}", format_table(directory.entries()));
    }
    Ok(())
}

fn format_table(entries: &[BuildingEntry]) -> String {
    let short_width = entries.iter().map(|e| e.short_name.len()).max().unwrap_or(5).max(5);
    let mut out = format!("{:<short_width$}  NAME\n{:-<short_width$}  ----\n", "SHORT", "");
    for entry in entries {
        let _ = writeln!(out, "{:<short_width$}  {}", entry.short_name, entry.long_name);
    }
    out
}
