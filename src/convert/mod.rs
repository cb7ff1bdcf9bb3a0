// src/convert/mod.rs
use std::path::Path;

use tracing::info;

use crate::error::ConvertError;

pub mod detect;
pub mod parse;
pub mod transform;
pub mod write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column names, in first-row order.
    pub headers: Vec<String>,
    /// Each data row, as a Vec of Strings (one per field, aligned to `headers`).
    pub rows: Vec<Vec<String>>,
}

/// What a successful run did, for the caller's confirmation message.
#[derive(Debug)]
pub struct ConvertSummary {
    /// Name of the column the detector selected.
    pub date_column: String,
    /// Number of data rows written.
    pub rows: usize,
}

/// Run the whole pipeline: parse `input`, find the YYYYMMDD column, hyphenate
/// it, and write the result to `output`. Fully sequential; the output file is
/// only created once the transformed table has been serialized in memory.
#[tracing::instrument(level = "info", skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn convert_file(input: &Path, output: &Path) -> Result<ConvertSummary, ConvertError> {
    let table = parse::load_table(input)?;

    let col = detect::find_date_column(&table).ok_or(ConvertError::DateColumnNotFound)?;
    let date_column = table.headers[col].clone();
    let rows = table.rows.len();
    info!(column = %date_column, rows, "date column selected");

    let table = transform::apply(table, col);
    write::write_table(&table, output)?;

    Ok(ConvertSummary { date_column, rows })
}
