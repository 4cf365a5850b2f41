//! In-memory port fakes shared by unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;

use crate::config::Config;
use crate::context::ServiceContext;
use crate::directory::BuildingEntry;
use crate::error::NetworkError;
use crate::geometry::{PathSegment, Point, Route};
use crate::ports::campus::{CampusFuture, CampusService};
use crate::ports::notifier::Notifier;

/// Campus service answering from canned responses and counting calls.
pub(crate) struct FakeCampus {
    buildings: Result<Vec<BuildingEntry>, NetworkError>,
    routes: Mutex<VecDeque<Result<Route, NetworkError>>>,
    gates: Mutex<VecDeque<oneshot::Receiver<Result<Route, NetworkError>>>>,
    directory_calls: AtomicUsize,
    queries: Mutex<Vec<(String, String)>>,
}

impl FakeCampus {
    pub(crate) fn new(buildings: Result<Vec<BuildingEntry>, NetworkError>) -> Arc<Self> {
        Arc::new(Self {
            buildings,
            routes: Mutex::new(VecDeque::new()),
            gates: Mutex::new(VecDeque::new()),
            directory_calls: AtomicUsize::new(0),
            queries: Mutex::new(Vec::new()),
        })
    }

    /// A service listing a handful of campus buildings.
    pub(crate) fn campus() -> Arc<Self> {
        Self::new(Ok(vec![
            BuildingEntry::new("MGH", "Mary Gates Hall"),
            BuildingEntry::new("CSE", "Paul G. Allen Center for Computer Science & Engineering"),
            BuildingEntry::new("BAG", "Bagley Hall"),
            BuildingEntry::new("ABE", "Architecture Hall"),
        ]))
    }

    /// Queue the answer to the next `find_path` call.
    pub(crate) fn push_route(&self, route: Result<Route, NetworkError>) {
        self.routes.lock().unwrap().push_back(route);
    }

    /// Make the next `find_path` call wait for a value sent on the returned channel.
    pub(crate) fn push_gate(&self) -> oneshot::Sender<Result<Route, NetworkError>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }

    pub(crate) fn directory_calls(&self) -> usize {
        self.directory_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn path_calls(&self) -> usize {
        self.queries.lock().unwrap().len()
    }

    pub(crate) fn queries(&self) -> Vec<(String, String)> {
        self.queries.lock().unwrap().clone()
    }
}

impl CampusService for Arc<FakeCampus> {
    fn valid_buildings(&self) -> CampusFuture<'_, Vec<BuildingEntry>> {
        self.directory_calls.fetch_add(1, Ordering::SeqCst);
        let answer = self.buildings.clone();
        Box::pin(async move { answer })
    }

    fn find_path(&self, start: &str, end: &str) -> CampusFuture<'_, Route> {
        self.queries.lock().unwrap().push((start.to_string(), end.to_string()));
        if let Some(gate) = self.gates.lock().unwrap().pop_front() {
            return Box::pin(async move {
                gate.await.unwrap_or_else(|_| Err(NetworkError::Transport("gate dropped".into())))
            });
        }
        let answer = self.routes.lock().unwrap().pop_front().unwrap_or_else(|| Ok(Route::default()));
        Box::pin(async move { answer })
    }
}

/// Notifier that remembers every alert.
#[derive(Default)]
pub(crate) struct CollectingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl CollectingNotifier {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

impl Notifier for Arc<CollectingNotifier> {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

/// Context wired to the given fakes with default configuration.
pub(crate) fn context(campus: &Arc<FakeCampus>, notifier: &Arc<CollectingNotifier>) -> ServiceContext {
    ServiceContext::new(Config::default(), Box::new(Arc::clone(campus)), Box::new(Arc::clone(notifier)))
}

/// A route through the given points.
pub(crate) fn route_through(points: &[(f64, f64)]) -> Route {
    Route::new(
        points
            .windows(2)
            .map(|pair| PathSegment {
                start: Point::new(pair[0].0, pair[0].1),
                end: Point::new(pair[1].0, pair[1].1),
            })
            .collect(),
    )
}
