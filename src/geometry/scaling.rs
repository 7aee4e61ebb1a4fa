use crate::domain::{Point, Polygon, PolygonSet};

/// Default multiplier into the integer-friendly domain used by the
/// exact-arithmetic solvers downstream.
pub const DEFAULT_SCALE: f64 = 1e9;

/// Uniform coordinate scaler.
///
/// Read once at startup (from config or CLI), immutable afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Rescaler {
    scale: f64,
}

impl Default for Rescaler {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE)
    }
}

impl Rescaler {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale
    }

    /// Scale one point.
    pub fn scale_point(&self, p: Point) -> Point {
        Point::new(p.x * self.scale, p.y * self.scale)
    }

    /// Produce a scaled copy of a polygon set.
    ///
    /// Pure transform: same polygon count, same per-polygon vertex count,
    /// same order. The input set is left untouched so callers can keep
    /// using the pre-scale coordinates.
    pub fn rescale(&self, set: &PolygonSet) -> PolygonSet {
        let polygons = set
            .iter()
            .map(|poly| {
                Polygon::new(
                    poly.vertices
                        .iter()
                        .map(|&p| self.scale_point(p))
                        .collect(),
                )
            })
            .collect();
        PolygonSet::new(polygons)
    }
}
