//! What the map renderer is handed.

use std::fmt::Write;

use serde::Serialize;

use crate::config::{Config, LatLng};
use crate::geometry::Edge;
use crate::state::MapState;

/// A full frame for the map surface: where to look and what to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    /// Geographic center of the map.
    pub center: LatLng,
    /// Zoom level.
    pub zoom: u8,
    /// Edges in draw order, in projected map units.
    pub edges: Vec<Edge>,
}

impl MapView {
    /// Frames `state` with the configured center and zoom.
    #[must_use]
    pub fn new(state: &MapState, config: &Config) -> Self {
        Self { center: config.map_center, zoom: config.zoom, edges: state.edges.clone() }
    }

    /// Plain-text listing, one edge per line.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = format!(
            "center {:.6},{:.6} zoom {}\n{} edge(s)\n",
            self.center.lat,
            self.center.lng,
            self.zoom,
            self.edges.len()
        );
        for edge in &self.edges {
            let _ = writeln!(
                out,
                "{:<7} ({}, {}) -> ({}, {})",
                edge.color, edge.x1, edge.y1, edge.x2, edge.y2
            );
        }
        out
    }
}
