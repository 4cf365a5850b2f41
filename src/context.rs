//! Service context bundling the port trait objects.

use std::path::Path;
use std::sync::{Arc, Mutex};

use log::{info, warn};

use crate::adapters::live::{LiveCampusService, StderrNotifier};
use crate::adapters::recording::RecordingCampusService;
use crate::adapters::replaying::ReplayingCampusService;
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::config::Config;
use crate::ports::campus::CampusService;
use crate::ports::notifier::Notifier;

/// Bundles the external boundaries with the configuration they run under.
///
/// Constructors wire up different adapter implementations (live,
/// recording, replaying); tests build one directly from fakes.
pub struct ServiceContext {
    /// Active configuration.
    pub config: Config,
    /// The remote campus service.
    pub campus: Box<dyn CampusService>,
    /// Where user-facing alerts go.
    pub notifier: Box<dyn Notifier>,
    /// Optional cassette recorder; written to disk on drop.
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(config: Config, campus: Box<dyn CampusService>, notifier: Box<dyn Notifier>) -> Self {
        Self { config, campus, notifier, recorder: None }
    }

    /// Creates a live context talking to `config.server_url`.
    #[must_use]
    pub fn live(config: Config) -> Self {
        let campus = LiveCampusService::new(&config.server_url);
        Self::new(config, Box::new(campus), Box::new(StderrNotifier))
    }

    /// Creates a live context that also records every service call.
    ///
    /// The cassette is written to `path` when this context is dropped.
    #[must_use]
    pub fn recording(config: Config, path: &Path) -> Self {
        let recorder =
            Arc::new(Mutex::new(CassetteRecorder::new(path, "campus-paths-session", &config.server_url)));
        let campus = RecordingCampusService::new(
            Box::new(LiveCampusService::new(&config.server_url)),
            Arc::clone(&recorder),
        );
        Self {
            config,
            campus: Box::new(campus),
            notifier: Box::new(StderrNotifier),
            recorder: Some(recorder),
        }
    }

    /// Creates a context whose campus service answers from a cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(config: Config, path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        info!("replaying {} interactions from {}", cassette.interactions.len(), path.display());
        let campus = ReplayingCampusService::new(CassetteReplayer::new(&cassette));
        Ok(Self::new(config, Box::new(campus), Box::new(StderrNotifier)))
    }
}

impl Drop for ServiceContext {
    fn drop(&mut self) {
        if let Some(recorder) = self.recorder.take() {
            let guard = match recorder.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            match guard.write() {
                Ok(path) => info!("recorded {} interactions to {}", guard.len(), path.display()),
                Err(e) => warn!("failed to write cassette: {e}"),
            }
        }
    }
}
