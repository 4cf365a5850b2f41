//! `campus-paths session` command.
//!
//! Scripts drive the coordinator the way a user drives the map:
//!
//! ```yaml
//! - action: select
//!   start: CSE
//!   end: MGH
//! - action: find
//! - action: reset
//! ```

use std::path::Path;

use log::info;
use serde::Deserialize;

use super::path::print_view;
use crate::context::ServiceContext;
use crate::coordinator::{FindOutcome, MapCoordinator};

/// One scripted user action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Action {
    /// Change one or both selections.
    Select {
        /// New starting building, if changing.
        #[serde(default)]
        start: Option<String>,
        /// New ending building, if changing.
        #[serde(default)]
        end: Option<String>,
    },
    /// Press "find path".
    Find,
    /// Press "reset".
    Reset,
}

/// Execute the `session` command.
///
/// Failed or skipped find actions are reported and the script continues,
/// matching how a user would simply try again. The final map view is
/// printed as JSON.
///
/// # Errors
///
/// Returns an error string if the script cannot be read, the directory
/// cannot be loaded, or a selection names an unknown building.
pub async fn run(ctx: &ServiceContext, script: &Path) -> Result<(), String> {
    let actions = load_script(script)?;
    let coordinator = MapCoordinator::new(ctx);
    coordinator
        .load_directory()
        .await
        .map_err(|e| format!("Failed to load building directory: {e}"))?;

    let outcomes = play(&coordinator, &actions).await?;
    info!("session finished: {} find action(s)", outcomes.len());
    print_view(&coordinator.view(), true)
}

/// Read a session script.
///
/// # Errors
///
/// Returns an error string if the file cannot be read or parsed.
pub fn load_script(path: &Path) -> Result<Vec<Action>, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read session script {}: {e}", path.display()))?;
    serde_yaml::from_str(&content)
        .map_err(|e| format!("Failed to parse session script {}: {e}", path.display()))
}

/// Apply `actions` in order, returning the outcome of each find.
async fn play(
    coordinator: &MapCoordinator<'_>,
    actions: &[Action],
) -> Result<Vec<FindOutcome>, String> {
    let mut outcomes = Vec::new();
    for (step, action) in actions.iter().enumerate() {
        match action {
            Action::Select { start, end } => {
                if let Some(start) = start {
                    coordinator.select_start(start).map_err(|e| format!("step {step}: {e}"))?;
                }
                if let Some(end) = end {
                    coordinator.select_end(end).map_err(|e| format!("step {step}: {e}"))?;
                }
            }
            Action::Find => {
                let outcome = coordinator.find_path().await;
                info!("step {step}: {outcome:?}");
                outcomes.push(outcome);
            }
            Action::Reset => coordinator.reset(),
        }
    }
    Ok(outcomes)
}
