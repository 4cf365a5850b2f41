//! Filled square markers built from line segments.
//!
//! The renderer only knows how to draw lines, so a marker is a run of
//! one-unit-apart vertical stripes covering the square.

use crate::geometry::{Edge, Point};

/// Default side length of an endpoint marker.
pub const DEFAULT_SQUARE_WIDTH: u32 = 10;

/// Largest marker side length accepted from configuration.
pub const MAX_SQUARE_WIDTH: u32 = 1000;

/// Builds `width` vertical stripes filling a square centered at `center`.
///
/// Stripe `i` sits at `center.x - width/2 + i` and runs from
/// `center.y + width/2` down to `center.y - width/2`.
#[must_use]
pub fn make_square(center: Point, width: u32, color: &str) -> Vec<Edge> {
    let offset = f64::from(width) / 2.0;
    (0..width)
        .map(|i| {
            let x = center.x - offset + f64::from(i);
            Edge {
                x1: x,
                y1: center.y + offset,
                x2: x,
                y2: center.y - offset,
                color: color.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_of_ten_at_hundred() {
        let edges = make_square(Point::new(100.0, 100.0), 10, "black");
        assert_eq!(edges.len(), 10);
        for (i, edge) in edges.iter().enumerate() {
            let expected_x = 95.0 + i as f64;
            assert_eq!(edge.x1, expected_x);
            assert_eq!(edge.x2, expected_x);
            assert_eq!(edge.y1, 105.0);
            assert_eq!(edge.y2, 95.0);
            assert_eq!(edge.color, "black");
        }
    }

    #[test]
    fn odd_width_uses_half_unit_offset() {
        let edges = make_square(Point::new(0.0, 0.0), 3, "red");
        let xs: Vec<f64> = edges.iter().map(|e| e.x1).collect();
        assert_eq!(xs, vec![-1.5, -0.5, 0.5]);
        assert!(edges.iter().all(|e| e.y1 == 1.5 && e.y2 == -1.5));
    }

    #[test]
    fn zero_width_draws_nothing() {
        assert!(make_square(Point::new(5.0, 5.0), 0, "black").is_empty());
    }
}
