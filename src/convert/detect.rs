use crate::convert::Table;

/// True when `value` has the loose YYYYMMDD shape: exactly 8 bytes and
/// numeric-parseable as a whole string. `parse::<f64>` tolerates a leading
/// sign, so this is deliberately looser than a strict all-digits test.
pub(crate) fn is_yyyymmdd(value: &str) -> bool {
    value.len() == 8 && value.parse::<f64>().is_ok()
}

/// Scan columns left to right and return the index of the first column whose
/// value qualifies as YYYYMMDD in **every** row, or `None` when no column
/// does. Ties go to the lower index, never to name or content quality.
pub fn find_date_column(table: &Table) -> Option<usize> {
    (0..table.headers.len()).find(|&col| {
        table
            .rows
            .iter()
            .all(|row| row.get(col).is_some_and(|v| is_yyyymmdd(v)))
    })
}
