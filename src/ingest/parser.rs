use crate::domain::Point;
use crate::error::{PolyError, Result};

/// Parse one dump line into an ordered vertex sequence.
///
/// # Format
/// `index,(x1&y1),(x2&y2),...,` - comma-separated fields. The first field
/// is an opaque index and is discarded. Each coordinate field is
/// parenthesized with `&` between x and y. Processing stops at the first
/// empty field (a trailing comma produces one); anything after it is
/// ignored even if present.
///
/// An empty result is valid here - zero-vertex candidates are dropped by
/// the canonicalize stage, not rejected by the parser.
pub fn parse_vertex_line(line: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();

    for field in line.trim_end_matches(['\n', '\r']).split(',').skip(1) {
        if field.is_empty() {
            break;
        }

        let trimmed = field.trim_matches(['(', ')']);
        let (sx, sy) = trimmed.split_once('&').ok_or_else(|| {
            PolyError::Parse(format!("missing '&' separator in field {field:?}"))
        })?;

        let x = parse_coord(sx, field)?;
        let y = parse_coord(sy, field)?;
        points.push(Point::new(x, y));
    }

    Ok(points)
}

fn parse_coord(token: &str, field: &str) -> Result<f64> {
    token
        .trim()
        .parse()
        .map_err(|_| PolyError::Parse(format!("non-numeric token {token:?} in field {field:?}")))
}
