use crate::domain::{Point, Polygon};
use crate::geometry::distance;

/// First/last vertices closer than this are treated as an explicit ring
/// closure and collapsed.
pub const RING_CLOSE_TOLERANCE: f64 = 1e-8;

/// Canonicalize a raw vertex sequence into a polygon, or drop it.
///
/// If the first and last vertex coincide within [`RING_CLOSE_TOLERANCE`]
/// the last vertex is removed - exactly one, never more. Candidates left
/// with fewer than 3 vertices are degenerate and yield `None`.
///
/// Idempotent: a sequence whose endpoints are already distinct passes
/// through unchanged.
pub fn canonicalize(mut vertices: Vec<Point>) -> Option<Polygon> {
    if vertices.len() >= 2 {
        let first = vertices[0];
        let last = vertices[vertices.len() - 1];
        if distance(first, last) < RING_CLOSE_TOLERANCE {
            vertices.pop();
        }
    }

    if vertices.len() < 3 {
        return None;
    }

    Some(Polygon::new(vertices))
}
