//! Recording adapter for the `CampusService` port.

use std::sync::{Arc, Mutex};

use serde_json::json;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::directory::BuildingEntry;
use crate::geometry::Route;
use crate::ports::campus::{CampusFuture, CampusService};

/// Records campus service calls while delegating to an inner implementation.
pub struct RecordingCampusService {
    inner: Box<dyn CampusService>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingCampusService {
    /// Wraps `inner`, recording into `recorder`.
    pub fn new(inner: Box<dyn CampusService>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl CampusService for RecordingCampusService {
    fn valid_buildings(&self) -> CampusFuture<'_, Vec<BuildingEntry>> {
        Box::pin(async move {
            let result = self.inner.valid_buildings().await;
            record_result(&self.recorder, "campus", "valid_buildings", &json!({}), &result);
            result
        })
    }

    fn find_path(&self, start: &str, end: &str) -> CampusFuture<'_, Route> {
        let input = json!({ "start": start, "end": end });
        let inner = self.inner.find_path(start, end);
        Box::pin(async move {
            let result = inner.await;
            record_result(&self.recorder, "campus", "find_path", &input, &result);
            result
        })
    }
}
