use std::fs;
use std::path::Path;

use crate::domain::{Point, Polygon, PolygonSet};
use crate::error::{PolyError, Result};

/// Read a canonical `.poly` file back into a polygon set.
///
/// The three header lines (tag, group count, polygon count) are skipped
/// without re-validation; every remaining non-empty line becomes one
/// polygon. Tokens are whitespace-separated integers: the first is the
/// vertex count n, followed by 2n interleaved coordinates.
///
/// Integer tokens only: this reader targets the integer-domain files the
/// upstream generator produces, not the float text `write_poly` emits.
/// Feed it integer-valued content when round-tripping.
pub fn read_poly(path: &Path) -> Result<PolygonSet> {
    let text = fs::read_to_string(path)?;
    parse_poly_text(&text)
}

fn parse_poly_text(text: &str) -> Result<PolygonSet> {
    let mut set = PolygonSet::default();

    for line in text.lines().skip(3) {
        if line.trim().is_empty() {
            continue;
        }
        set.push(parse_polygon_line(line)?);
    }

    Ok(set)
}

fn parse_polygon_line(line: &str) -> Result<Polygon> {
    let mut tokens = line.split_whitespace();

    let count_token = tokens
        .next()
        .ok_or_else(|| PolyError::Parse("empty polygon line".to_string()))?;
    let n = usize::try_from(parse_int_token(count_token)?)
        .map_err(|_| PolyError::Parse(format!("negative vertex count {count_token:?}")))?;

    let mut vertices = Vec::with_capacity(n);
    for _ in 0..n {
        let x = next_coord(&mut tokens, line)?;
        let y = next_coord(&mut tokens, line)?;
        vertices.push(Point::new(x as f64, y as f64));
    }

    Ok(Polygon::new(vertices))
}

fn next_coord<'a>(tokens: &mut impl Iterator<Item = &'a str>, line: &str) -> Result<i64> {
    let token = tokens.next().ok_or_else(|| {
        PolyError::Parse(format!("truncated polygon line {line:?}"))
    })?;
    parse_int_token(token)
}

fn parse_int_token(token: &str) -> Result<i64> {
    token
        .parse()
        .map_err(|_| PolyError::Parse(format!("non-integer token {token:?}")))
}
