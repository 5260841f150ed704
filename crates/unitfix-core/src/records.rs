//! Preview parsing of repaired tables for display and JSON export

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A repaired table split into columns and rows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedTable {
    /// Column names from the header line
    pub columns: Vec<String>,
    /// Row cells; rows keep whatever width they came with
    pub rows: Vec<Vec<String>>,
}

impl FixedTable {
    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Parse repaired output lines into a table using standard CSV rules.
///
/// The first line is the header. Rows are not padded or truncated to the
/// header width; combined records legitimately carry more fields than the
/// original header announced.
pub fn parse_fixed(lines: &[String], separator: char) -> Result<FixedTable> {
    if !separator.is_ascii() {
        return Err(Error::InvalidSeparator(separator));
    }
    let delimiter = separator as u8;

    let joined = lines.join("\n");
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(joined.as_bytes());

    let headers = reader.headers()?;
    let columns: Vec<String> = headers.iter().map(str::to_string).collect();

    if columns.is_empty() {
        return Err(Error::NoColumns);
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(FixedTable { columns, rows })
}
