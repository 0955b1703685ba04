//! Partitioning an indicator column into per-tone sample groups.
//!
//! Rows are matched to their normalized tone, the indicator cell is coerced
//! to a number, and one [`Group`] per tone is collected in the fixed
//! reporting order (Soft, Neutral, Hard). Rows with an unrecognized tone or
//! a non-coercible cell are silently dropped — missing data is excluded,
//! never an error. A tone with no usable values contributes no group.
//!
//! The comparison itself needs at least two groups; falling short is a
//! per-column skip condition ([`PartitionError::InsufficientGroups`]), not a
//! run-level failure.

use crate::{
    signal::SignalTone,
    table::{CellValue, DataTable},
};

/// All finite values of one indicator column for one tone.
///
/// Invariant: non-empty, every value finite.
#[derive(Debug, Clone)]
pub struct Group {
    /// The tone these values belong to.
    pub tone: SignalTone,
    /// The sample values, in row order.
    pub values: Vec<f64>,
}

/// Why a column could not be partitioned.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PartitionError {
    /// The indicator column is not present in the table.
    #[display("column {name:?} not found in table")]
    MissingColumn {
        /// The requested column name.
        name: String,
    },
    /// Fewer than two tones have any usable values.
    #[display("insufficient groups: {found} tone(s) with data, need at least 2")]
    InsufficientGroups {
        /// Number of non-empty groups found.
        found: usize,
    },
}

/// Normalizes the label column into one tone per row.
///
/// The resulting vector is aligned with the table rows; unrecognized and
/// missing labels become `None`. Computed once per table and shared across
/// all indicator columns.
///
/// Returns `None` when the label column does not exist.
#[must_use]
pub fn normalize_labels(table: &DataTable, label_column: &str) -> Option<Vec<Option<SignalTone>>> {
    let column = table.column(label_column)?;
    Some(column.map(|cell| SignalTone::normalize(cell.as_text())).collect())
}

/// Splits one indicator column into per-tone groups.
///
/// `tones` must be row-aligned with the table (see [`normalize_labels`]).
///
/// # Examples
///
/// ```
/// use tonova_analysis::{
///     partition::{normalize_labels, partition_column},
///     table::{CellValue, DataTable},
/// };
///
/// let table = DataTable::new(
///     vec!["signal".into(), "rate".into()],
///     vec![
///         vec![CellValue::Text("мягкий".into()), CellValue::Number(7.0)],
///         vec![CellValue::Text("жесткий".into()), CellValue::Number(16.0)],
///     ],
/// )
/// .unwrap();
///
/// let tones = normalize_labels(&table, "signal").unwrap();
/// let groups = partition_column(&table, &tones, "rate").unwrap();
/// assert_eq!(groups.len(), 2);
/// ```
pub fn partition_column(
    table: &DataTable,
    tones: &[Option<SignalTone>],
    indicator: &str,
) -> Result<Vec<Group>, PartitionError> {
    let cells = table
        .column(indicator)
        .ok_or_else(|| PartitionError::MissingColumn {
            name: indicator.to_string(),
        })?
        .collect::<Vec<&CellValue>>();

    let groups = SignalTone::ORDERED
        .iter()
        .filter_map(|&tone| {
            let values = cells
                .iter()
                .zip(tones)
                .filter(|(_, row_tone)| **row_tone == Some(tone))
                .filter_map(|(cell, _)| cell.as_number())
                .collect::<Vec<_>>();
            (!values.is_empty()).then_some(Group { tone, values })
        })
        .collect::<Vec<_>>();

    if groups.len() < 2 {
        return Err(PartitionError::InsufficientGroups {
            found: groups.len(),
        });
    }
    Ok(groups)
}
