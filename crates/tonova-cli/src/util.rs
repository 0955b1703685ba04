use std::{
    collections::BTreeMap,
    fs::File,
    io::{self, BufWriter, Write as _},
    path::Path,
};

use anyhow::Context;
use tonova_analysis::table::{CellValue, DataTable};

/// Reads a data table from a JSON file containing an array of row objects.
///
/// Cells may be numbers, strings, or `null`; column order follows first
/// appearance across the records.
pub fn read_table_file<P>(path: P) -> anyhow::Result<DataTable>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open table file: {}", path.display()))?;
    let reader = io::BufReader::new(file);
    let records: Vec<BTreeMap<String, CellValue>> = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse table JSON file: {}", path.display()))?;
    Ok(DataTable::from_records(&records))
}

/// Writes a value as pretty JSON to the given path.
pub fn write_json_file<T, P>(value: &T, path: P) -> anyhow::Result<()>
where
    T: serde::Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
    writeln!(writer)
        .with_context(|| format!("Failed to write newline after JSON to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush output to {}", path.display()))?;
    Ok(())
}

/// Formats an optional statistic for display, rendering `None` as "n/a".
pub fn format_stat(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.4}"))
}

/// Validates a significance level argument.
pub fn validate_alpha(alpha: f64) -> anyhow::Result<f64> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(alpha)
    } else {
        anyhow::bail!("alpha must be strictly between 0 and 1, got {alpha}")
    }
}
