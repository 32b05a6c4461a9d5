use std::fmt;

use thiserror::Error;

/// Field texts read as missing data, matching the usual dataframe defaults.
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common dataframe dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Infer the most specific type for a raw CSV field.
    pub fn infer(s: &str) -> Self {
        if NA_VALUES.contains(&s) {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        if s == "true" || s == "false" {
            return CellValue::Bool(s == "true");
        }
        CellValue::String(s.to_string())
    }

    /// Try to interpret the value as an `f64` for plotting.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Errors raised when a column is looked up by name
// ---------------------------------------------------------------------------

#[derive(Error, Debug, PartialEq)]
pub enum DatasetError {
    #[error("column '{0}' not found in dataset")]
    MissingColumn(String),
    #[error("column '{column}', row {row}: '{value}' is not a number")]
    NotNumeric {
        column: String,
        row: usize,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table: header names plus one `CellValue` per column per row.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Column names in header order, exactly as written in the file.
    pub column_names: Vec<String>,
    /// All rows; each has `column_names.len()` cells.
    pub rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    pub fn new(column_names: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == column_names.len()));
        Dataset { column_names, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_index(&self, name: &str) -> Result<usize, DatasetError> {
        self.column_names
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
    }

    /// Cells of a named column, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<&CellValue>, DatasetError> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| &row[idx]).collect())
    }

    /// A named column as numbers. Empty and `NaN` cells come back as `None`.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>, DatasetError> {
        self.column(name)?
            .into_iter()
            .enumerate()
            .map(|(row, cell)| {
                if cell.is_null() {
                    return Ok(None);
                }
                cell.as_f64()
                    .map(|v| (!v.is_nan()).then_some(v))
                    .ok_or_else(|| DatasetError::NotNumeric {
                        column: name.to_string(),
                        row,
                        value: cell.to_string(),
                    })
            })
            .collect()
    }
}
