use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{PolyError, Result};

/// Differences at or below this are measurement noise and not reported.
pub const DIVERGENCE_TOLERANCE: f64 = 1e-8;

/// Column names accepted as the timing value, in preference order.
const TIME_COLUMNS: [&str; 2] = ["length", "realcost"];

/// One solver timing table, keyed by its `index` column.
///
/// Source files are semicolon-delimited with a header row. Each row must
/// carry an `index` cell and a numeric value in either a `length` or a
/// `realcost` column. Duplicate indices keep the last value but the
/// first row position.
#[derive(Debug, Default)]
pub struct ResultTable {
    order: Vec<String>,
    values: HashMap<String, f64>,
}

impl ResultTable {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines();

        let header: Vec<&str> = match lines.next() {
            Some(h) => h.split(';').map(str::trim).collect(),
            None => return Ok(Self::default()),
        };

        let mut table = Self::default();

        for line in lines {
            if line.trim().is_empty() {
                continue;
            }

            let row: HashMap<&str, &str> = header
                .iter()
                .copied()
                .zip(line.split(';').map(str::trim))
                .collect();

            let index = row.get("index").copied().ok_or_else(|| {
                PolyError::Data(format!("row without an index cell: {line:?}"))
            })?;
            let value = timing_value(&row, line)?;

            if !table.values.contains_key(index) {
                table.order.push(index.to_string());
            }
            table.values.insert(index.to_string(), value);
        }

        Ok(table)
    }

    pub fn get(&self, index: &str) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Indices in first-seen row order.
    pub fn indices(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn timing_value(row: &HashMap<&str, &str>, line: &str) -> Result<f64> {
    for name in TIME_COLUMNS {
        if let Some(cell) = row.get(name) {
            return cell.parse().map_err(|_| {
                PolyError::Parse(format!("non-numeric {name} value {cell:?}"))
            });
        }
    }
    Err(PolyError::Data(format!(
        "can't find time: no length or realcost column in row {line:?}"
    )))
}

/// Indices present in both tables whose values differ by strictly more
/// than [`DIVERGENCE_TOLERANCE`]. Indices present in only one table are
/// skipped silently. Output follows the first table's row order.
pub fn diverging_indices(one: &ResultTable, two: &ResultTable) -> Vec<String> {
    one.indices()
        .filter_map(|index| {
            let a = one.get(index)?;
            let b = two.get(index)?;
            ((a - b).abs() > DIVERGENCE_TOLERANCE).then(|| index.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length_table() {
        let table = ResultTable::parse("index;length\n1;0.5\n2;1.25\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("1"), Some(0.5));
        assert_eq!(table.get("2"), Some(1.25));
    }

    #[test]
    fn test_parse_realcost_table() {
        let table = ResultTable::parse("index;realcost;extra\n3;2.5;x\n").unwrap();
        assert_eq!(table.get("3"), Some(2.5));
    }

    #[test]
    fn test_length_preferred_over_realcost() {
        let table = ResultTable::parse("index;realcost;length\n0;9.0;1.0\n").unwrap();
        assert_eq!(table.get("0"), Some(1.0));
    }

    #[test]
    fn test_missing_timing_column_is_error() {
        let err = ResultTable::parse("index;other\n1;foo\n").unwrap_err();
        assert!(matches!(err, PolyError::Data(_)));
    }

    #[test]
    fn test_divergence_strictly_above_tolerance() {
        let one = ResultTable::parse("index;length\n3;1.0\n").unwrap();

        // Exactly 1e-8 apart: not reported.
        let two = ResultTable::parse("index;length\n3;1.00000001\n").unwrap();
        assert!(diverging_indices(&one, &two).is_empty());

        // 2e-8 apart: reported.
        let two = ResultTable::parse("index;length\n3;1.00000002\n").unwrap();
        assert_eq!(diverging_indices(&one, &two), vec!["3".to_string()]);
    }

    #[test]
    fn test_unmatched_indices_skipped() {
        let one = ResultTable::parse("index;length\n1;1.0\n2;5.0\n").unwrap();
        let two = ResultTable::parse("index;length\n2;2.0\n9;9.0\n").unwrap();
        assert_eq!(diverging_indices(&one, &two), vec!["2".to_string()]);
    }

    #[test]
    fn test_output_follows_first_table_order() {
        let one = ResultTable::parse("index;length\nb;1.0\na;1.0\n").unwrap();
        let two = ResultTable::parse("index;length\na;2.0\nb;2.0\n").unwrap();
        assert_eq!(
            diverging_indices(&one, &two),
            vec!["b".to_string(), "a".to_string()]
        );
    }
}
