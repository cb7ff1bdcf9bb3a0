use std::{fs, path::Path};

use tracing::debug;

use crate::convert::Table;
use crate::error::ConvertError;

/// Serialize `table` as CSV (header row first, quoting only where the format
/// requires it) and persist it to `path`. The whole document is built in
/// memory before the destination file is touched, so a failed run never
/// leaves a half-written output.
pub fn write_table(table: &Table, path: &Path) -> Result<(), ConvertError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(&table.headers)
        .map_err(|e| ConvertError::Write(format!("failed to serialize headers: {}", e)))?;
    for row in &table.rows {
        writer
            .write_record(row)
            .map_err(|e| ConvertError::Write(format!("failed to serialize row: {}", e)))?;
    }

    let buf = writer
        .into_inner()
        .map_err(|e| ConvertError::Write(format!("failed to flush CSV buffer: {}", e)))?;

    fs::write(path, &buf)
        .map_err(|e| ConvertError::Write(format!("failed to write {}: {}", path.display(), e)))?;

    debug!(bytes = buf.len(), path = %path.display(), "output written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Table {
        Table {
            headers: vec!["id".into(), "d".into()],
            rows: vec![vec!["1".into(), "2023-01-15".into()]],
        }
    }

    #[test]
    fn writes_header_then_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_table(&sample(), &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "id,d\n1,2023-01-15\n");
    }

    #[test]
    fn quotes_only_where_needed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = Table {
            headers: vec!["note".into()],
            rows: vec![vec!["a, b".into()], vec!["plain".into()]],
        };

        write_table(&table, &path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "note\n\"a, b\"\nplain\n"
        );
    }

    #[test]
    fn unwritable_destination_is_a_write_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("out.csv");

        let err = write_table(&sample(), &path).unwrap_err();
        assert!(matches!(err, ConvertError::Write(_)));
    }
}
