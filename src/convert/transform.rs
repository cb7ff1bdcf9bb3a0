use crate::convert::detect::is_yyyymmdd;
use crate::convert::Table;

/// Rewrite an 8-digit `YYYYMMDD` string as `YYYY-MM-DD`. Values that do not
/// qualify are returned unchanged; each row is re-checked independently so a
/// heterogeneous column degrades gracefully instead of crashing. There is no
/// calendar validation: `99999999` becomes `9999-99-99`.
pub fn hyphenate(value: &str) -> String {
    if !is_yyyymmdd(value) {
        return value.to_string();
    }
    // A value that parses as f64 is pure ASCII, so byte slicing cannot split
    // a character.
    format!("{}-{}-{}", &value[0..4], &value[4..6], &value[6..8])
}

/// Produce a new table with `date_col` hyphenated in every row. All other
/// columns pass through unchanged, in original order.
pub fn apply(table: Table, date_col: usize) -> Table {
    let rows = table
        .rows
        .into_iter()
        .map(|mut row| {
            if let Some(value) = row.get_mut(date_col) {
                *value = hyphenate(value);
            }
            row
        })
        .collect();

    Table {
        headers: table.headers,
        rows,
    }
}
