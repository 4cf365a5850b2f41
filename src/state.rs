//! The edges currently drawn on the map.
//!
//! [`MapStateStore`] is the only mutable view state. It changes through
//! exactly two operations, [`MapStateStore::reset`] and
//! [`MapStateStore::append`], and publishes whole snapshots to subscribers.

use log::debug;
use serde::Serialize;
use tokio::sync::watch;

use crate::geometry::Edge;

/// Snapshot of everything drawn since the last reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapState {
    /// Drawn edges, oldest batch first.
    pub edges: Vec<Edge>,
    /// Number of non-empty batches appended since the last reset.
    pub batches: usize,
}

impl MapState {
    /// Returns `true` when nothing is drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Owner of the map state.
///
/// Batches are applied whole: a snapshot never contains part of an
/// appended batch.
#[derive(Debug)]
pub struct MapStateStore {
    tx: watch::Sender<MapState>,
}

impl MapStateStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { tx: watch::Sender::new(MapState::default()) }
    }

    /// Clears the map.
    pub fn reset(&self) {
        self.tx.send_replace(MapState::default());
        debug!("map state reset");
    }

    /// Concatenates `edges` after everything already drawn.
    ///
    /// An empty batch leaves the state untouched and wakes no subscriber;
    /// clearing the map is [`MapStateStore::reset`]'s job.
    pub fn append(&self, edges: Vec<Edge>) {
        if edges.is_empty() {
            return;
        }
        let added = edges.len();
        self.tx.send_modify(|state| {
            state.edges.extend(edges);
            state.batches += 1;
        });
        debug!("appended {added} edges to map state");
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> MapState {
        self.tx.borrow().clone()
    }

    /// Subscribes to state changes. The receiver starts at the current state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<MapState> {
        self.tx.subscribe()
    }
}

impl Default for MapStateStore {
    fn default() -> Self {
        Self::new()
    }
}
