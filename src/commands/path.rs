//! `campus-paths path` command.

use crate::context::ServiceContext;
use crate::coordinator::{FindOutcome, MapCoordinator};
use crate::view::MapView;

/// Execute the `path` command.
///
/// Loads the directory, selects `start` and `end`, runs one find-path
/// action and prints the resulting map view.
///
/// # Errors
///
/// Returns an error string if the directory cannot be loaded, a building
/// is unknown, a selection is missing, or the service fails.
pub async fn run(ctx: &ServiceContext, start: &str, end: &str, json: bool) -> Result<(), String> {
    let coordinator = MapCoordinator::new(ctx);
    coordinator
        .load_directory()
        .await
        .map_err(|e| format!("Failed to load building directory: {e}"))?;
    coordinator.select_start(start).map_err(|e| e.to_string())?;
    coordinator.select_end(end).map_err(|e| e.to_string())?;

    match coordinator.find_path().await {
        FindOutcome::Drawn { .. } | FindOutcome::SelfRoute => {}
        FindOutcome::Invalid(e) => return Err(e.to_string()),
        FindOutcome::Failed(e) => return Err(format!("Failed to find path {start} -> {end}: {e}")),
        FindOutcome::Superseded => return Err("path query was superseded".to_string()),
    }

    print_view(&coordinator.view(), json)
}

/// Print a map view as text or pretty JSON.
pub(crate) fn print_view(view: &MapView, json: bool) -> Result<(), String> {
    if json {
        let out = serde_json::to_string_pretty(view)
            .map_err(|e| format!("Failed to serialize map view: {e}"))?;
        println!("{out}");
    } else {
        print!("{}", view.render_text());
    }
    Ok(())
}
