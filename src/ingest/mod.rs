pub mod canonical;
pub mod parser;

pub use canonical::{RING_CLOSE_TOLERANCE, canonicalize};
pub use parser::parse_vertex_line;

use std::fs;
use std::path::Path;

use crate::domain::PolygonSet;
use crate::error::Result;

/// Parse a whole dump into a canonical polygon set.
///
/// One polygon candidate per line; candidates that canonicalize to fewer
/// than 3 vertices are dropped, survivors keep their input order. The
/// first malformed field aborts the whole parse - no partial set is
/// returned.
pub fn parse_polygon_set(text: &str) -> Result<PolygonSet> {
    let mut set = PolygonSet::default();

    for line in text.lines() {
        let vertices = parse_vertex_line(line)?;
        if let Some(polygon) = canonicalize(vertices) {
            set.push(polygon);
        }
    }

    Ok(set)
}

/// Read and parse a dump file.
pub fn load_polygon_set(path: &Path) -> Result<PolygonSet> {
    let text = fs::read_to_string(path)?;
    parse_polygon_set(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_filters_degenerates() {
        let text = "0,(0&0),(1&0),(1&1),(0&1),(0&0)\n1,(5&5),(6&6)\n2,\n3,(0&0),(2&0),(1&2)\n";
        let set = parse_polygon_set(text).unwrap();

        // Lines 1 (two vertices) and 2 (empty) are dropped; order preserved.
        assert_eq!(set.len(), 2);
        assert_eq!(set.polygons[0].len(), 4);
        assert_eq!(set.polygons[1].len(), 3);
    }

    #[test]
    fn test_no_short_polygons_survive() {
        let text = "0,(0&0),(1&1),(0&0)\n1,(0&0),\n";
        let set = parse_polygon_set(text).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_malformed_line_aborts() {
        let text = "0,(0&0),(1&0),(1&1)\n1,(1,2),(3&4)\n";
        assert!(parse_polygon_set(text).is_err());
    }
}
