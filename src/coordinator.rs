//! Top-level owner of the map's view state.
//!
//! The coordinator holds the building directory, the two selections and
//! the [`MapStateStore`]. User actions ("find path", "reset") come in
//! here; renderers only ever subscribe to snapshots.
//!
//! Overlapping path queries are ordered by a request counter: a response
//! is applied only if no newer request (or reset) was issued while it was
//! outstanding.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use log::{debug, info, warn};
use tokio::sync::watch;

use crate::context::ServiceContext;
use crate::directory::{BuildingDirectory, NULL_BUILDING};
use crate::error::{InvalidQuery, NetworkError, UnknownBuilding};
use crate::state::{MapState, MapStateStore};
use crate::synth::EdgeSynthesizer;
use crate::view::MapView;

/// The start and end buildings currently chosen, by short name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Starting building, or the sentinel.
    pub start: String,
    /// Ending building, or the sentinel.
    pub end: String,
}

impl Selection {
    /// Checks that both ends are real buildings.
    ///
    /// # Errors
    ///
    /// Returns which side is still unselected.
    pub fn validate(&self) -> Result<(), InvalidQuery> {
        if self.start == NULL_BUILDING {
            Err(InvalidQuery::NoStart)
        } else if self.end == NULL_BUILDING {
            Err(InvalidQuery::NoEnd)
        } else {
            Ok(())
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self { start: NULL_BUILDING.to_string(), end: NULL_BUILDING.to_string() }
    }
}

/// What a find-path action ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindOutcome {
    /// The route was drawn with this many edges.
    Drawn {
        /// Edges appended to the map.
        edges: usize,
    },
    /// Start and end are the same building; nothing to draw.
    SelfRoute,
    /// A selection is missing; no request was sent.
    Invalid(InvalidQuery),
    /// The service failed; the map is unchanged.
    Failed(NetworkError),
    /// A newer request or a reset was issued first; the answer was dropped.
    Superseded,
}

/// Owns the view state and applies user actions to it.
pub struct MapCoordinator<'a> {
    ctx: &'a ServiceContext,
    synthesizer: EdgeSynthesizer,
    directory: Mutex<BuildingDirectory>,
    selection: Mutex<Selection>,
    store: MapStateStore,
    latest_request: AtomicU64,
}

impl<'a> MapCoordinator<'a> {
    /// Creates a coordinator with an empty map and a sentinel-only directory.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self {
            ctx,
            synthesizer: EdgeSynthesizer::new(ctx.config.square_width),
            directory: Mutex::new(BuildingDirectory::new()),
            selection: Mutex::new(Selection::default()),
            store: MapStateStore::new(),
            latest_request: AtomicU64::new(0),
        }
    }

    /// Fetches the building directory.
    ///
    /// On failure the user is alerted and the previous directory is kept.
    ///
    /// # Errors
    ///
    /// Returns the service failure after it has been reported.
    pub async fn load_directory(&self) -> Result<usize, NetworkError> {
        match BuildingDirectory::load(self.ctx.campus.as_ref()).await {
            Ok(directory) => {
                let count = directory.buildings().len();
                *lock(&self.directory) = directory;
                Ok(count)
            }
            Err(e) => {
                warn!("failed to load building directory: {e}");
                self.ctx.notifier.alert(e.alert_message());
                Err(e)
            }
        }
    }

    /// A copy of the current directory.
    #[must_use]
    pub fn directory(&self) -> BuildingDirectory {
        lock(&self.directory).clone()
    }

    /// The current selections.
    #[must_use]
    pub fn selection(&self) -> Selection {
        lock(&self.selection).clone()
    }

    /// Chooses the starting building.
    ///
    /// # Errors
    ///
    /// Returns an error if `short_name` is neither listed nor the sentinel.
    pub fn select_start(&self, short_name: &str) -> Result<(), UnknownBuilding> {
        self.check_listed(short_name)?;
        lock(&self.selection).start = short_name.to_string();
        Ok(())
    }

    /// Chooses the ending building.
    ///
    /// # Errors
    ///
    /// Returns an error if `short_name` is neither listed nor the sentinel.
    pub fn select_end(&self, short_name: &str) -> Result<(), UnknownBuilding> {
        self.check_listed(short_name)?;
        lock(&self.selection).end = short_name.to_string();
        Ok(())
    }

    fn check_listed(&self, short_name: &str) -> Result<(), UnknownBuilding> {
        if lock(&self.directory).contains(short_name) {
            Ok(())
        } else {
            Err(UnknownBuilding(short_name.to_string()))
        }
    }

    /// Finds the route between the selected buildings and draws it on top
    /// of whatever is already on the map.
    ///
    /// Failures are reported through the notifier; the map only changes
    /// when a whole route is drawn.
    pub async fn find_path(&self) -> FindOutcome {
        let selection = self.selection();
        if let Err(invalid) = selection.validate() {
            debug!("find path skipped: {invalid}");
            self.ctx.notifier.alert(&invalid.to_string());
            return FindOutcome::Invalid(invalid);
        }
        let Selection { start, end } = selection;
        if start == end {
            // The service answers a self-route with an empty path, which draws nothing.
            info!("{start} to itself: nothing to draw");
            return FindOutcome::SelfRoute;
        }

        let request = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        debug!("request {request}: {start} -> {end}");
        let result = self.ctx.campus.find_path(&start, &end).await;

        if self.latest_request.load(Ordering::SeqCst) != request {
            warn!("request {request} ({start} -> {end}) superseded, dropping its answer");
            return FindOutcome::Superseded;
        }

        match result {
            Ok(route) => {
                let edges = self.synthesizer.synthesize(&route);
                let count = edges.len();
                self.store.append(edges);
                info!("drew {start} -> {end}: {} legs, {count} edges", route.path.len());
                FindOutcome::Drawn { edges: count }
            }
            Err(e) => {
                warn!("find path {start} -> {end} failed: {e}");
                self.ctx.notifier.alert(e.alert_message());
                FindOutcome::Failed(e)
            }
        }
    }

    /// Clears the map and both selections.
    ///
    /// Answers to requests still in flight are dropped when they arrive.
    pub fn reset(&self) {
        self.latest_request.fetch_add(1, Ordering::SeqCst);
        *lock(&self.selection) = Selection::default();
        self.store.reset();
        info!("map reset");
    }

    /// The current map state.
    #[must_use]
    pub fn snapshot(&self) -> MapState {
        self.store.snapshot()
    }

    /// Subscribes to map state snapshots.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<MapState> {
        self.store.subscribe()
    }

    /// The current frame for the renderer.
    #[must_use]
    pub fn view(&self) -> MapView {
        MapView::new(&self.store.snapshot(), &self.ctx.config)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{context, route_through, CollectingNotifier, FakeCampus};

    #[tokio::test]
    async fn directory_loads_sorted_with_sentinel() {
        let campus = FakeCampus::campus();
        let notifier = CollectingNotifier::new();
        let ctx = context(&campus, &notifier);
        let coordinator = MapCoordinator::new(&ctx);

        assert_eq!(coordinator.load_directory().await, Ok(4));
        let directory = coordinator.directory();
        let shorts: Vec<&str> =
            directory.entries().iter().map(|e| e.short_name.as_str()).collect();
        assert_eq!(shorts, ["NULL", "ABE", "BAG", "MGH", "CSE"]);
        assert_eq!(campus.directory_calls(), 1);
    }

    #[tokio::test]
    async fn directory_failure_alerts_and_keeps_sentinel() {
        let campus = FakeCampus::new(Err(NetworkError::Transport("refused".into())));
        let notifier = CollectingNotifier::new();
        let ctx = context(&campus, &notifier);
        let coordinator = MapCoordinator::new(&ctx);

        assert!(coordinator.load_directory().await.is_err());
        assert_eq!(coordinator.directory(), BuildingDirectory::new());
        assert_eq!(notifier.alerts(), ["Server is not running."]);
    }

    #[tokio::test]
    async fn unlisted_building_cannot_be_selected() {
        let campus = FakeCampus::campus();
        let notifier = CollectingNotifier::new();
        let ctx = context(&campus, &notifier);
        let coordinator = MapCoordinator::new(&ctx);
        coordinator.load_directory().await.unwrap();

        assert_eq!(coordinator.select_start("XYZ"), Err(UnknownBuilding("XYZ".into())));
        assert!(coordinator.select_start("CSE").is_ok());
        assert!(coordinator.select_end(NULL_BUILDING).is_ok());
        assert_eq!(coordinator.selection().start, "CSE");
    }

    #[tokio::test]
    async fn null_selection_never_reaches_the_service() {
        let campus = FakeCampus::campus();
        let notifier = CollectingNotifier::new();
        let ctx = context(&campus, &notifier);
        let coordinator = MapCoordinator::new(&ctx);
        coordinator.load_directory().await.unwrap();

        assert_eq!(coordinator.find_path().await, FindOutcome::Invalid(InvalidQuery::NoStart));

        coordinator.select_start("CSE").unwrap();
        assert_eq!(coordinator.find_path().await, FindOutcome::Invalid(InvalidQuery::NoEnd));

        coordinator.select_start(NULL_BUILDING).unwrap();
        coordinator.select_end("MGH").unwrap();
        assert_eq!(coordinator.find_path().await, FindOutcome::Invalid(InvalidQuery::NoStart));

        assert_eq!(campus.path_calls(), 0);
        assert_eq!(notifier.alerts().len(), 3);
        assert!(coordinator.snapshot().is_empty());
    }

    #[tokio::test]
    async fn self_route_draws_nothing_and_sends_nothing() {
        let campus = FakeCampus::campus();
        let notifier = CollectingNotifier::new();
        let ctx = context(&campus, &notifier);
        let coordinator = MapCoordinator::new(&ctx);
        coordinator.load_directory().await.unwrap();

        coordinator.select_start("BAG").unwrap();
        coordinator.select_end("BAG").unwrap();
        assert_eq!(coordinator.find_path().await, FindOutcome::SelfRoute);
        assert_eq!(campus.path_calls(), 0);
        assert!(coordinator.snapshot().is_empty());
        assert!(notifier.alerts().is_empty());
    }

    #[tokio::test]
    async fn routes_accumulate_until_reset() {
        let campus = FakeCampus::campus();
        let notifier = CollectingNotifier::new();
        let ctx = context(&campus, &notifier);
        let coordinator = MapCoordinator::new(&ctx);
        coordinator.load_directory().await.unwrap();

        let first = route_through(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let second = route_through(&[(50.0, 50.0), (60.0, 70.0)]);
        campus.push_route(Ok(first.clone()));
        campus.push_route(Ok(second.clone()));

        coordinator.select_start("CSE").unwrap();
        coordinator.select_end("MGH").unwrap();
        assert_eq!(coordinator.find_path().await, FindOutcome::Drawn { edges: 2 + 20 });

        coordinator.select_start("BAG").unwrap();
        assert_eq!(coordinator.find_path().await, FindOutcome::Drawn { edges: 1 + 20 });

        let synthesizer = EdgeSynthesizer::default();
        let state = coordinator.snapshot();
        assert_eq!(state.edges, [synthesizer.synthesize(&first), synthesizer.synthesize(&second)].concat());
        assert_eq!(state.batches, 2);
        assert_eq!(
            campus.queries(),
            [("CSE".to_string(), "MGH".to_string()), ("BAG".to_string(), "MGH".to_string())]
        );

        coordinator.reset();
        assert!(coordinator.snapshot().is_empty());
        assert_eq!(coordinator.selection(), Selection::default());
    }

    #[tokio::test]
    async fn failed_query_alerts_and_leaves_map_alone() {
        let campus = FakeCampus::campus();
        let notifier = CollectingNotifier::new();
        let ctx = context(&campus, &notifier);
        let coordinator = MapCoordinator::new(&ctx);
        coordinator.load_directory().await.unwrap();
        coordinator.select_start("CSE").unwrap();
        coordinator.select_end("MGH").unwrap();

        campus.push_route(Ok(route_through(&[(0.0, 0.0), (1.0, 1.0)])));
        campus.push_route(Err(NetworkError::Status(500)));
        campus.push_route(Err(NetworkError::Transport("refused".into())));

        coordinator.find_path().await;
        let before = coordinator.snapshot();

        assert_eq!(coordinator.find_path().await, FindOutcome::Failed(NetworkError::Status(500)));
        assert!(matches!(coordinator.find_path().await, FindOutcome::Failed(NetworkError::Transport(_))));
        assert_eq!(coordinator.snapshot(), before);
        assert_eq!(notifier.alerts(), ["Error.", "Server is not running."]);
    }

    #[tokio::test]
    async fn stale_answer_does_not_overwrite_newer_route() {
        let campus = FakeCampus::campus();
        let notifier = CollectingNotifier::new();
        let ctx = context(&campus, &notifier);
        let coordinator = MapCoordinator::new(&ctx);
        coordinator.load_directory().await.unwrap();
        coordinator.select_start("CSE").unwrap();
        coordinator.select_end("MGH").unwrap();

        let older = route_through(&[(0.0, 0.0), (5.0, 5.0)]);
        let newer = route_through(&[(100.0, 100.0), (200.0, 100.0)]);
        let first_gate = campus.push_gate();
        let second_gate = campus.push_gate();

        let newer_answer = newer.clone();
        let (first, second, ()) = tokio::join!(coordinator.find_path(), coordinator.find_path(), async move {
            // The newer request is answered first, then the older one.
            second_gate.send(Ok(newer_answer)).unwrap();
            tokio::task::yield_now().await;
            first_gate.send(Ok(older)).unwrap();
        });

        assert_eq!(first, FindOutcome::Superseded);
        assert_eq!(second, FindOutcome::Drawn { edges: 1 + 20 });
        assert_eq!(coordinator.snapshot().edges, EdgeSynthesizer::default().synthesize(&newer));
    }

    #[tokio::test]
    async fn reset_drops_answers_still_in_flight() {
        let campus = FakeCampus::campus();
        let notifier = CollectingNotifier::new();
        let ctx = context(&campus, &notifier);
        let coordinator = MapCoordinator::new(&ctx);
        coordinator.load_directory().await.unwrap();
        coordinator.select_start("CSE").unwrap();
        coordinator.select_end("MGH").unwrap();

        let gate = campus.push_gate();
        let answer = route_through(&[(0.0, 0.0), (1.0, 0.0)]);
        let (outcome, ()) = tokio::join!(coordinator.find_path(), async {
            coordinator.reset();
            gate.send(Ok(answer)).unwrap();
        });

        assert_eq!(outcome, FindOutcome::Superseded);
        assert!(coordinator.snapshot().is_empty());
    }

    #[tokio::test]
    async fn subscribers_see_each_drawn_route() {
        let campus = FakeCampus::campus();
        let notifier = CollectingNotifier::new();
        let ctx = context(&campus, &notifier);
        let coordinator = MapCoordinator::new(&ctx);
        coordinator.load_directory().await.unwrap();
        let mut rx = coordinator.subscribe();

        coordinator.select_start("CSE").unwrap();
        coordinator.select_end("MGH").unwrap();
        campus.push_route(Ok(route_through(&[(0.0, 0.0), (3.0, 4.0)])));
        coordinator.find_path().await;

        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().edges.len(), 21);
        assert_eq!(coordinator.view().edges.len(), 21);
    }
}
