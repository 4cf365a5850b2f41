//! Replaying adapter for the `CampusService` port.

use std::sync::Mutex;

use serde_json::json;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::directory::BuildingEntry;
use crate::geometry::Route;
use crate::ports::campus::{CampusFuture, CampusService};

/// Serves recorded campus service answers from a cassette.
///
/// A route is only served for the start/end pair it was recorded with.
pub struct ReplayingCampusService {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingCampusService {
    /// Creates a replaying service backed by `replayer`.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl CampusService for ReplayingCampusService {
    fn valid_buildings(&self) -> CampusFuture<'_, Vec<BuildingEntry>> {
        let output = next_output(&self.replayer, "campus", "valid_buildings", &json!({}));
        Box::pin(async move { replay_result(output?) })
    }

    fn find_path(&self, start: &str, end: &str) -> CampusFuture<'_, Route> {
        let input = json!({ "start": start, "end": end });
        let output = next_output(&self.replayer, "campus", "find_path", &input);
        Box::pin(async move { replay_result(output?) })
    }
}
