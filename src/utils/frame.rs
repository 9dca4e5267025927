//! Minimal tabular containers accepted by `format_data`.
//!
//! CSV format understood by `DataFrame::from_csv`:
//! - UTF-8, comma-separated
//! - Optional header row (auto-detected: the first row is a header if it
//!   contains any non-numeric, non-empty cell)
//! - Double-quoted fields with embedded commas are handled correctly
//! - Every data cell must be numeric and every row the same width

use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, Result};
use crate::math::matrix::Matrix;

/// A named one-dimensional column of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: Option<String>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Series {
        Series { name: Some(name.into()), values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Rows of numeric cells under named columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFrame")]
pub struct DataFrame {
    pub columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

#[derive(Deserialize)]
struct RawFrame {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl TryFrom<RawFrame> for DataFrame {
    type Error = String;

    fn try_from(raw: RawFrame) -> std::result::Result<Self, Self::Error> {
        DataFrame::new(raw.columns, raw.rows).map_err(|e| e.to_string())
    }
}

impl DataFrame {
    /// Fails if any row's width differs from the number of columns.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Result<DataFrame> {
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns.len()) {
            return Err(NetworkError::InvalidShape(format!(
                "frame row {} has {} cells, expected {}",
                i, row.len(), columns.len()
            )));
        }
        Ok(DataFrame { columns, rows })
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, name: &str) -> Option<Series> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(Series::new(name, self.rows.iter().map(|r| r[idx]).collect()))
    }

    /// The cells as a plain (n_rows, n_columns) matrix.
    pub fn values(&self) -> Matrix {
        Matrix {
            rows: self.rows.len(),
            cols: self.columns.len(),
            data: self.rows.clone(),
        }
    }

    pub fn into_values(self) -> Matrix {
        Matrix {
            rows: self.rows.len(),
            cols: self.columns.len(),
            data: self.rows,
        }
    }

    /// Parses CSV text. Without a header row columns are named `"0"`, `"1"`, ...
    pub fn from_csv(text: &str) -> Result<DataFrame> {
        let mut lines = text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .peekable();

        let header = match lines.peek() {
            Some(first) if is_header(first) => {
                let cells = parse_csv_row(first);
                lines.next();
                Some(cells.into_iter().map(|c| c.trim().to_string()).collect::<Vec<_>>())
            }
            _ => None,
        };

        let mut rows: Vec<Vec<f64>> = Vec::new();
        for (row_idx, line) in lines.enumerate() {
            let cells = parse_csv_row(line);
            rows.push(parse_floats(&cells, row_idx + 1)?);
        }

        let width = header.as_ref()
            .map(Vec::len)
            .or_else(|| rows.first().map(Vec::len))
            .unwrap_or(0);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(NetworkError::InvalidData(format!(
                    "Row {}: cell count {} does not match expected {}",
                    i + 1, row.len(), width
                )));
            }
        }

        let columns = header.unwrap_or_else(|| (0..width).map(|i| i.to_string()).collect());
        Ok(DataFrame { columns, rows })
    }
}

/// Returns `true` if the row looks like a header (any cell non-numeric).
fn is_header(line: &str) -> bool {
    parse_csv_row(line).iter().any(|c| {
        let t = c.trim();
        !t.is_empty() && t.parse::<f64>().is_err()
    })
}

/// Parses a single CSV row, handling double-quoted fields.
fn parse_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                // Escaped quote inside quoted field.
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}

fn parse_floats(cells: &[String], row_num: usize) -> Result<Vec<f64>> {
    cells.iter()
        .map(|c| {
            c.trim().parse::<f64>().map_err(|_| {
                NetworkError::InvalidData(format!("Row {}: '{}' is not a valid number", row_num, c))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_detected() {
        let df = DataFrame::from_csv("a,b\n1,2\n3,4\n").unwrap();
        assert_eq!(df.columns, vec!["a", "b"]);
        assert_eq!(df.values().data, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn headerless_columns_are_numbered() {
        let df = DataFrame::from_csv("1,2,3\n").unwrap();
        assert_eq!(df.columns, vec!["0", "1", "2"]);
    }

    #[test]
    fn quoted_cells_parse() {
        let df = DataFrame::from_csv("\"x,1\",y\n\"5\",6\n").unwrap();
        assert_eq!(df.columns, vec!["x,1", "y"]);
        assert_eq!(df.values().data, vec![vec![5.0, 6.0]]);
    }

    #[test]
    fn ragged_rows_fail() {
        assert!(DataFrame::from_csv("1,2\n3\n").is_err());
    }

    #[test]
    fn deserialize_rejects_ragged_rows() {
        let json = r#"{"columns":["a","b"],"rows":[[1.0,2.0],[3.0]]}"#;
        assert!(serde_json::from_str::<DataFrame>(json).is_err());
        let ok: DataFrame = serde_json::from_str(r#"{"columns":["a"],"rows":[[1.0]]}"#).unwrap();
        assert_eq!(ok.n_rows(), 1);
    }

    #[test]
    fn column_lookup() {
        let df = DataFrame::from_csv("a,b\n1,2\n3,4\n").unwrap();
        assert_eq!(df.column("b").unwrap().values, vec![2.0, 4.0]);
        assert!(df.column("c").is_none());
    }
}
