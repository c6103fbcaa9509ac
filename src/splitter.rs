//! The chunked accumulate-and-flush core.
//!
//! Input rows are pulled in bounded batches, buffered until the per-file row
//! target is reached, then flushed into the next `{prefix}_part{N}.xlsx`
//! workbook. Peak memory is proportional to the row target, never the input
//! size.

use crate::error::SplitError;
use crate::io::csv::CsvBatches;
use crate::io::xlsx::write_xlsx;
use crate::record::Row;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Hard per-sheet row limit of the xlsx format.
pub const SHEET_ROW_CEILING: usize = 1_048_576;

/// Data rows available per sheet once the header row is written.
pub const MAX_SHEET_DATA_ROWS: usize = SHEET_ROW_CEILING - 1;

/// Largest accepted `rows_per_file`, kept below the sheet ceiling so that a
/// batch-boundary overshoot stays representable.
pub const ROWS_PER_FILE_LIMIT: usize = 1_000_000;

/// Default flush threshold.
pub const DEFAULT_ROWS_PER_FILE: usize = 500_000;

/// Default number of rows pulled from the source per read step.
pub const DEFAULT_BATCH_ROWS: usize = 50_000;

/// Tuning knobs for [`split`].
#[derive(Clone, Debug)]
pub struct SplitConfig {
    /// Flush threshold: a new artifact is cut once at least this many rows
    /// are buffered. Checked only at batch boundaries, so an artifact may
    /// hold up to `rows_per_file + batch_rows - 1` rows (subject to
    /// `max_sheet_rows`). Values below 1 are raised to 1.
    pub rows_per_file: usize,
    /// Rows pulled from the source per read step.
    pub batch_rows: usize,
    /// Hard cap on data rows per artifact. A flush never writes more than
    /// this; excess rows are carried forward into the next accumulation.
    pub max_sheet_rows: usize,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            rows_per_file: DEFAULT_ROWS_PER_FILE,
            batch_rows: DEFAULT_BATCH_ROWS,
            max_sheet_rows: MAX_SHEET_DATA_ROWS,
        }
    }
}

/// Outcome of a completed [`split`] run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitSummary {
    /// Number of workbooks written.
    pub artifacts: usize,
    /// Total data rows across all workbooks, equal to the input's row count.
    pub total_rows: u64,
}

/// Clamp a requested per-file row count into the accepted range.
///
/// Values above [`ROWS_PER_FILE_LIMIT`] are lowered to it with a warning;
/// values below 1 are raised to 1.
pub fn clamp_rows_per_file(rows: usize) -> usize {
    if rows > ROWS_PER_FILE_LIMIT {
        warn!(
            requested = rows,
            limit = ROWS_PER_FILE_LIMIT,
            "a sheet cannot hold more than {SHEET_ROW_CEILING} rows, lowering rows per file"
        );
        return ROWS_PER_FILE_LIMIT;
    }
    rows.max(1)
}

/// Split the CSV at `input` into `{prefix}_part{N}.xlsx` workbooks.
///
/// Rows are read in batches of `config.batch_rows` and buffered; once the
/// buffer reaches `config.rows_per_file` rows it is flushed into the next
/// sequentially numbered workbook. Any remainder left when the input is
/// exhausted becomes a final, possibly undersized, artifact. Empty input
/// (header only or zero bytes) produces no artifacts.
///
/// A flush writes at most `config.max_sheet_rows` rows; rows beyond the cap
/// stay buffered for the next artifact, so no workbook can exceed the sheet
/// ceiling.
///
/// # Errors
/// [`SplitError::MissingInput`] if `input` does not exist, checked before
/// anything is written. Any later read or write failure aborts the run and
/// leaves previously written artifacts in place.
pub fn split(
    input: &Path,
    prefix: &Path,
    config: &SplitConfig,
) -> Result<SplitSummary, SplitError> {
    if !input.exists() {
        return Err(SplitError::MissingInput(input.to_path_buf()));
    }

    let mut source = CsvBatches::open(input, config.batch_rows)?;
    let schema = source.schema().clone();
    let rows_per_file = config.rows_per_file.max(1);
    let max_rows = config.max_sheet_rows.max(1);

    let mut buffered: VecDeque<Vec<Row>> = VecDeque::new();
    let mut buffered_rows = 0usize;
    let mut part = 1usize;
    let mut total_rows = 0u64;

    let mut flush = |buffered: &mut VecDeque<Vec<Row>>,
                     buffered_rows: &mut usize,
                     part: &mut usize|
     -> Result<(), SplitError> {
        let take = (*buffered_rows).min(max_rows);
        let rows = drain_rows(buffered, take);
        *buffered_rows -= rows.len();
        let path = artifact_path(prefix, *part);
        let written = write_xlsx(&path, &schema, &rows)?;
        info!(rows = written, path = %path.display(), "wrote artifact");
        *part += 1;
        Ok(())
    };

    while let Some(batch) = source.next_batch()? {
        buffered_rows += batch.len();
        total_rows += batch.len() as u64;
        buffered.push_back(batch);

        while buffered_rows >= rows_per_file {
            flush(&mut buffered, &mut buffered_rows, &mut part)?;
        }
    }

    // Remainder after the source is exhausted.
    while buffered_rows > 0 {
        flush(&mut buffered, &mut buffered_rows, &mut part)?;
    }

    Ok(SplitSummary {
        artifacts: part - 1,
        total_rows,
    })
}

/// Concatenate exactly `take` rows off the front of the buffered batches.
///
/// A batch straddling the boundary is split, with its tail pushed back for
/// the next artifact. Callers must ensure `take` rows are buffered.
fn drain_rows(buffered: &mut VecDeque<Vec<Row>>, take: usize) -> Vec<Row> {
    let mut rows = Vec::with_capacity(take);
    while rows.len() < take {
        let Some(mut batch) = buffered.pop_front() else {
            break;
        };
        let need = take - rows.len();
        if batch.len() <= need {
            rows.append(&mut batch);
        } else {
            let tail = batch.split_off(need);
            rows.append(&mut batch);
            buffered.push_front(tail);
        }
    }
    rows
}

/// Path of artifact number `part` for the given output prefix.
pub fn artifact_path(prefix: &Path, part: usize) -> PathBuf {
    let mut name = prefix.as_os_str().to_os_string();
    name.push(format!("_part{part}.xlsx"));
    PathBuf::from(name)
}
