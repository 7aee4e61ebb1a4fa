use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::domain::PolygonSet;
use crate::error::Result;

/// Write a polygon set as a canonical `.poly` file.
///
/// Layout:
/// - line 1: literal tag `poly`
/// - line 2: literal group count `1`
/// - line 3: decimal polygon count
/// - one line per polygon: vertex count, then x/y interleaved with six
///   fractional digits, space-separated, input order preserved
///
/// The file is written to a `.tmp` sibling first and renamed into place,
/// so a failure mid-serialization never leaves a truncated output. On
/// failure the sibling is removed before the error propagates.
pub fn write_poly(path: &Path, set: &PolygonSet) -> Result<()> {
    let tmp_path = tmp_sibling(path);

    let result = write_lines(&tmp_path, set)
        .and_then(|()| fs::rename(&tmp_path, path).map_err(Into::into));
    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn write_lines(path: &Path, set: &PolygonSet) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "poly")?;
    writeln!(writer, "1")?;
    writeln!(writer, "{}", set.len())?;

    for polygon in set {
        write!(writer, "{}", polygon.len())?;
        for p in &polygon.vertices {
            write!(writer, " {:.6} {:.6}", p.x, p.y)?;
        }
        writeln!(writer)?;
    }

    writer.flush()?;
    Ok(())
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("out.poly"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Point, Polygon};
    use tempfile::tempdir;

    #[test]
    fn test_write_poly_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("real.poly");

        let set = PolygonSet::new(vec![Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])]);

        write_poly(&path, &set).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "poly\n1\n1\n4 0.000000 0.000000 1.000000 0.000000 1.000000 1.000000 0.000000 1.000000\n"
        );
    }

    #[test]
    fn test_dump_line_to_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("real.poly");

        let set =
            crate::ingest::parse_polygon_set("0,(0&0),(1&0),(1&1),(0&1),(0&0)").unwrap();
        write_poly(&path, &set).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "poly\n1\n1\n4 0.000000 0.000000 1.000000 0.000000 1.000000 1.000000 0.000000 1.000000\n"
        );
    }

    #[test]
    fn test_write_poly_empty_set() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.poly");

        write_poly(&path, &PolygonSet::default()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "poly\n1\n0\n");
    }

    #[test]
    fn test_write_poly_failure_cleans_up_tmp() {
        let dir = tempdir().unwrap();

        // A directory at the target path makes the final rename fail.
        let target = dir.path().join("real.poly");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), "kept").unwrap();

        let result = write_poly(&target, &PolygonSet::default());

        assert!(result.is_err());
        assert!(!dir.path().join("real.poly.tmp").exists());
        // Whatever already lived at the target is untouched.
        assert_eq!(fs::read_to_string(target.join("keep.txt")).unwrap(), "kept");
    }

    #[test]
    fn test_write_poly_unwritable_destination() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("no_such_dir").join("real.poly");

        assert!(write_poly(&target, &PolygonSet::default()).is_err());
        assert!(!target.exists());
    }

    #[test]
    fn test_write_poly_no_tmp_left_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("real.poly");

        write_poly(&path, &PolygonSet::default()).unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("real.poly.tmp").exists());
    }
}
