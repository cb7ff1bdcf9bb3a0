use std::{fs, io::ErrorKind, path::Path};

use tracing::debug;

use crate::convert::Table;
use crate::error::ConvertError;

/// Read `path` fully into memory, then parse it as headed CSV.
pub fn load_table(path: &Path) -> Result<Table, ConvertError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConvertError::InputNotFound(path.to_path_buf()),
        _ => ConvertError::Parse(format!("failed to read {}: {}", path.display(), e)),
    })?;

    parse_table(&content)
}

/// Decode CSV text into a `Table`. The first row names the columns; every
/// following row must have the same field count (the reader is strict, ragged
/// rows are a parse error). Zero data rows is a fatal `EmptyInput`.
pub fn parse_table(content: &str) -> Result<Table, ConvertError> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ConvertError::Parse(format!("failed to read CSV headers: {}", e)))?
        .iter()
        .map(String::from)
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            ConvertError::Parse(format!("CSV parse error at record {}: {}", idx + 1, e))
        })?;
        rows.push(record.iter().map(String::from).collect());
    }

    if rows.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    debug!(columns = headers.len(), rows = rows.len(), "parsed input table");
    Ok(Table { headers, rows })
}
