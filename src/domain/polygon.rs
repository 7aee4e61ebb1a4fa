use super::Point;

/// An ordered vertex sequence.
///
/// Once canonical (see `ingest::canonical`) a polygon never repeats its
/// first vertex as its last and holds at least 3 vertices. Vertex order is
/// significant: it defines the edge sequence downstream solvers consume.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// An ordered collection of polygons.
///
/// Order is preserved from input to output; downstream tooling matches
/// polygons by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonSet {
    pub polygons: Vec<Polygon>,
}

impl PolygonSet {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn push(&mut self, polygon: Polygon) {
        self.polygons.push(polygon);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.polygons.iter()
    }
}

impl<'a> IntoIterator for &'a PolygonSet {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.polygons.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_preserves_order() {
        let mut set = PolygonSet::default();
        set.push(Polygon::new(vec![Point::new(0.0, 0.0)]));
        set.push(Polygon::new(vec![Point::new(1.0, 1.0)]));

        assert_eq!(set.len(), 2);
        assert_eq!(set.polygons[0].vertices[0].x, 0.0);
        assert_eq!(set.polygons[1].vertices[0].x, 1.0);
    }
}
