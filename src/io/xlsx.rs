//! XLSX workbook output.

use crate::error::SplitError;
use crate::record::{Row, Schema, Value};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Write `rows` under a header row into a single-worksheet workbook at
/// `path`.
///
/// Cells are typed from [`Value`]: strings as text, numbers as numbers,
/// nulls left blank. The header occupies worksheet row 0, so `rows` may hold
/// at most one less than the sheet row limit.
///
/// # Returns
/// The number of data rows written (i.e., `rows.len()`).
///
/// # Errors
/// Returns an error if the worksheet limits are exceeded or the file cannot
/// be saved.
pub fn write_xlsx(
    path: impl AsRef<Path>,
    schema: &Schema,
    rows: &[Row],
) -> Result<usize, SplitError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in schema.columns().iter().enumerate() {
        sheet.write_string(0, col as u16, name)?;
    }
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        for (col, value) in row.iter().enumerate() {
            match value {
                Value::Str(s) => {
                    sheet.write_string(r, col as u16, s)?;
                }
                Value::Number(n) => {
                    sheet.write_number(r, col as u16, *n)?;
                }
                Value::Null => {}
            }
        }
    }

    workbook.save(path.as_ref())?;
    Ok(rows.len())
}
