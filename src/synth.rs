//! Turns a computed route into the edges that draw it.

use crate::geometry::{Edge, Route, MARKER_COLOR, ROUTE_COLOR};
use crate::marker::{make_square, DEFAULT_SQUARE_WIDTH};

/// Styles routes into drawable edges.
///
/// Output order matters for layering: route legs come first, then the
/// origin marker, then the destination marker, so markers draw on top.
#[derive(Debug, Clone, Copy)]
pub struct EdgeSynthesizer {
    square_width: u32,
}

impl EdgeSynthesizer {
    /// Creates a synthesizer drawing markers of the given width.
    #[must_use]
    pub const fn new(square_width: u32) -> Self {
        Self { square_width }
    }

    /// Marker width in map units.
    #[must_use]
    pub const fn square_width(&self) -> u32 {
        self.square_width
    }

    /// Produces the edges for `route`.
    ///
    /// A self-route (empty path) produces nothing, markers included.
    #[must_use]
    pub fn synthesize(&self, route: &Route) -> Vec<Edge> {
        let (Some(origin), Some(destination)) = (route.origin(), route.destination()) else {
            return Vec::new();
        };

        let mut edges = Vec::with_capacity(route.path.len() + 2 * self.square_width as usize);
        edges.extend(
            route.path.iter().map(|segment| Edge::between(segment.start, segment.end, ROUTE_COLOR)),
        );
        edges.extend(make_square(origin, self.square_width, MARKER_COLOR));
        edges.extend(make_square(destination, self.square_width, MARKER_COLOR));
        edges
    }
}

impl Default for EdgeSynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_SQUARE_WIDTH)
    }
}
