//! # sheetsplit
//!
//! Split a large CSV file into a sequence of Excel (`.xlsx`) workbooks.
//!
//! A worksheet holds at most 1,048,576 rows, and loading a multi-gigabyte
//! CSV in one piece exhausts memory long before that. Sheetsplit streams the
//! input in bounded row batches, accumulates them until a configurable
//! per-file row target is reached, and flushes each accumulation into its
//! own sequentially numbered workbook (`data_part1.xlsx`, `data_part2.xlsx`,
//! ...). Peak memory stays proportional to the row target, never the input
//! size.
//!
//! ## Quick start
//!
//! ```no_run
//! use sheetsplit::{SplitConfig, split};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), sheetsplit::SplitError> {
//! let summary = split(
//!     Path::new("big.csv"),
//!     Path::new("big"),
//!     &SplitConfig {
//!         rows_per_file: 500_000,
//!         ..SplitConfig::default()
//!     },
//! )?;
//! println!("wrote {} workbooks", summary.artifacts);
//! # Ok(())
//! # }
//! ```
//!
//! ## Guarantees
//!
//! - Rows across all workbooks sum to the input's row count, in input order.
//! - Parts are numbered from 1, strictly increasing, with no gaps.
//! - No workbook exceeds the sheet row ceiling: a flush that would overflow
//!   writes up to the cap and carries the excess into the next artifact.
//! - Rows whose field count differs from the header are rejected with a
//!   row-numbered error.
//!
//! ## Module overview
//!
//! - [`splitter`] - the accumulate-and-flush core and its configuration
//! - [`io`] - CSV batch reading and XLSX workbook writing
//! - [`record`] - schema-on-read data model (tagged cell values)
//! - [`error`] - the error taxonomy
//! - [`cli`] - argument definitions for the `sheetsplit` binary

pub mod cli;
pub mod error;
pub mod io;
pub mod record;
pub mod splitter;

pub use error::SplitError;
pub use record::{Row, Schema, Value};
pub use splitter::{SplitConfig, SplitSummary, split};
