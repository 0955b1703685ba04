//! Rectangular data table with by-name column access.
//!
//! The analysis pipeline consumes tabular data produced elsewhere (the
//! spreadsheet reader lives outside this crate): named columns, rows of
//! cells, where each cell is text, a number, or missing. The table is the
//! only input abstraction the pipeline needs — column lookup by name plus
//! row iteration.
//!
//! # Numeric coercion
//!
//! Indicator cells are coerced to `f64` on access. Text cells are accepted
//! when they parse as a number after trimming; a decimal comma is tolerated
//! because the source spreadsheets are Russian. Anything else is missing
//! data, which the pipeline drops rather than errors on.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single table cell.
///
/// Deserializes untagged, so a JSON row object maps naturally:
/// numbers become [`CellValue::Number`], strings [`CellValue::Text`], and
/// `null` [`CellValue::Missing`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// A numeric cell.
    Number(f64),
    /// A text cell (may still be coercible to a number).
    Text(String),
    /// An explicitly missing cell.
    Missing,
}

impl CellValue {
    /// Coerces the cell to a finite number, if possible.
    ///
    /// # Examples
    ///
    /// ```
    /// use tonova_analysis::table::CellValue;
    ///
    /// assert_eq!(CellValue::Number(1.5).as_number(), Some(1.5));
    /// assert_eq!(CellValue::Text("2,5".into()).as_number(), Some(2.5));
    /// assert_eq!(CellValue::Text("n/a".into()).as_number(), None);
    /// assert_eq!(CellValue::Missing.as_number(), None);
    /// ```
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => value.is_finite().then_some(*value),
            Self::Text(text) => {
                let trimmed = text.trim().replace(',', ".");
                trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
            }
            Self::Missing => None,
        }
    }

    /// Returns the cell text, if this is a text cell.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Number(_) | Self::Missing => None,
        }
    }
}

/// A rectangular table: named columns and rows of cells.
///
/// # Examples
///
/// ```
/// use tonova_analysis::table::{CellValue, DataTable};
///
/// let table = DataTable::new(
///     vec!["signal".into(), "rate".into()],
///     vec![
///         vec![CellValue::Text("мягкий".into()), CellValue::Number(7.5)],
///         vec![CellValue::Text("жесткий".into()), CellValue::Number(16.0)],
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(table.num_rows(), 2);
/// assert!(table.has_column("rate"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

/// Rows whose cell count does not match the column count.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("row {row_index} has {found} cells, expected {expected}")]
pub struct RaggedRowError {
    /// Index of the first offending row.
    pub row_index: usize,
    /// Cells found in that row.
    pub found: usize,
    /// Cells expected (the column count).
    pub expected: usize,
}

impl DataTable {
    /// Builds a table from column names and rows, validating rectangularity.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Result<Self, RaggedRowError> {
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(RaggedRowError {
                    row_index,
                    found: row.len(),
                    expected: columns.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Builds a table from row records (name-to-cell maps), as produced by
    /// deserializing a JSON array of objects.
    ///
    /// Column order follows first appearance across the records; cells
    /// absent from a record become [`CellValue::Missing`].
    #[must_use]
    pub fn from_records(records: &[BTreeMap<String, CellValue>]) -> Self {
        let mut columns = Vec::<String>::new();
        for record in records {
            for name in record.keys() {
                if !columns.contains(name) {
                    columns.push(name.clone());
                }
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|name| record.get(name).cloned().unwrap_or(CellValue::Missing))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    /// Column names, in table order.
    #[must_use]
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Whether a column with this name exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Iterates the cells of the named column, top to bottom.
    ///
    /// Returns `None` when the column does not exist.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &CellValue>> {
        let index = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(move |row| &row[index]))
    }
}
