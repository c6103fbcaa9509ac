//! Error taxonomy for the splitter.
//!
//! A missing input is detected before any processing begins; every other
//! variant is a processing failure that aborts the run. Artifacts written
//! before the failure are left on disk, there is no rollback.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while splitting a CSV into workbooks.
#[derive(Debug, Error)]
pub enum SplitError {
    /// The input path does not exist. Reported before anything is written.
    #[error("input file '{}' does not exist", .0.display())]
    MissingInput(PathBuf),

    /// A data row disagrees with the header on field count. `row` is the
    /// 1-based data row number (header excluded).
    #[error("row {row}: expected {expected} fields, found {found}")]
    InconsistentColumns {
        row: u64,
        expected: usize,
        found: usize,
    },

    /// Failure while reading or parsing the input CSV.
    #[error("read CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Failure while building or saving an output workbook.
    #[error("write workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    /// Any other I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
