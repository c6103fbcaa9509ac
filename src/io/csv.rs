//! Streaming CSV ingestion in bounded row batches.
//!
//! This module provides:
//! - **Single-pass batch reading**: [`CsvBatches`] opens the file once and
//!   yields successive batches of at most `batch_rows` rows.
//! - **Schema capture**: the header row is read eagerly into a [`Schema`]
//!   and every later row is checked against it.
//!
//! # Design notes
//! - Batching is **row-count based**, not byte-range based.
//! - Memory is bounded by the batch size, never the file size.
//! - The reader is forward-only; the splitter never needs a row pre-count,
//!   so no counting pass is made.

use crate::error::SplitError;
use crate::record::{Row, Schema, Value};
use csv::{Reader, StringRecord};
use std::fs::File;
use std::path::Path;

/// Forward-only batch reader over a CSV file.
///
/// Construct with [`CsvBatches::open`] and drain with
/// [`CsvBatches::next_batch`].
pub struct CsvBatches {
    reader: Reader<File>,
    schema: Schema,
    batch_rows: usize,
    rows_read: u64,
}

impl CsvBatches {
    /// Open `path` and capture its header row as the schema.
    ///
    /// `batch_rows` is the maximum number of rows returned per
    /// [`next_batch`](CsvBatches::next_batch) call; values below 1 are
    /// raised to 1.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or the header row
    /// cannot be parsed.
    pub fn open(path: impl AsRef<Path>, batch_rows: usize) -> Result<Self, SplitError> {
        // flexible: field-count mismatches are reported as
        // `InconsistentColumns` with a row number, not as csv errors.
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path.as_ref())?;
        let headers = reader.headers()?;
        let schema = Schema::new(headers.iter().map(str::to_string).collect());
        Ok(Self {
            reader,
            schema,
            batch_rows: batch_rows.max(1),
            rows_read: 0,
        })
    }

    /// Column names captured from the header row.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Data rows consumed so far (header excluded).
    pub fn rows_read(&self) -> u64 {
        self.rows_read
    }

    /// Pull the next batch of at most `batch_rows` parsed rows.
    ///
    /// Returns `Ok(None)` once the source is exhausted.
    ///
    /// # Errors
    /// Returns an error on malformed CSV, or
    /// [`SplitError::InconsistentColumns`] when a row's field count differs
    /// from the header's.
    pub fn next_batch(&mut self) -> Result<Option<Vec<Row>>, SplitError> {
        let mut rows: Vec<Row> = Vec::new();
        let mut record = StringRecord::new();
        while rows.len() < self.batch_rows {
            if !self.reader.read_record(&mut record)? {
                break;
            }
            self.rows_read += 1;
            if record.len() != self.schema.len() {
                return Err(SplitError::InconsistentColumns {
                    row: self.rows_read,
                    expected: self.schema.len(),
                    found: record.len(),
                });
            }
            rows.push(record.iter().map(Value::infer).collect());
        }
        if rows.is_empty() { Ok(None) } else { Ok(Some(rows)) }
    }
}
