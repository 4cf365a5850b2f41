//! Planar geometry shared by the route drawing pipeline.
//!
//! Coordinates are in the map's projected units, not latitude/longitude.

use serde::{Deserialize, Serialize};

/// Color used for the legs of a drawn route.
pub const ROUTE_COLOR: &str = "purple";

/// Color used for the endpoint markers of a drawn route.
pub const MARKER_COLOR: &str = "black";

/// A point in projected map coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single drawable line segment with an explicit display color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Start x.
    pub x1: f64,
    /// Start y.
    pub y1: f64,
    /// End x.
    pub x2: f64,
    /// End y.
    pub y2: f64,
    /// Display color (a CSS color name).
    pub color: String,
}

impl Edge {
    /// Creates an edge between two points.
    #[must_use]
    pub fn between(start: Point, end: Point, color: &str) -> Self {
        Self { x1: start.x, y1: start.y, x2: end.x, y2: end.y, color: color.to_string() }
    }
}

/// One leg of a computed route, as received from the campus service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    /// Where this leg begins.
    pub start: Point,
    /// Where this leg ends.
    pub end: Point,
}

/// Ordered legs from origin to destination.
///
/// An empty route is how the service answers a self-route (origin equals
/// destination).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Legs in traversal order.
    pub path: Vec<PathSegment>,
}

impl Route {
    /// Creates a route from its legs.
    #[must_use]
    pub fn new(path: Vec<PathSegment>) -> Self {
        Self { path }
    }

    /// Returns `true` for a self-route.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Start point of the first leg.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.path.first().map(|segment| segment.start)
    }

    /// End point of the last leg.
    #[must_use]
    pub fn destination(&self) -> Option<Point> {
        self.path.last().map(|segment| segment.end)
    }
}
