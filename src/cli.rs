//! Command line interface definition.

use crate::splitter::DEFAULT_ROWS_PER_FILE;
use clap::Parser;
use std::path::PathBuf;

/// Convert a large CSV file into multiple Excel workbooks.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the input CSV file
    pub input_csv: PathBuf,

    /// Rows per output workbook (values above 1,000,000 are clamped)
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_ROWS_PER_FILE)]
    pub rows: usize,

    /// Output prefix; defaults to the input path without its extension
    #[arg(short, long, value_name = "PREFIX")]
    pub output_prefix: Option<PathBuf>,
}

impl Cli {
    /// The prefix that artifact names are derived from.
    pub fn effective_prefix(&self) -> PathBuf {
        match &self.output_prefix {
            Some(prefix) => prefix.clone(),
            None => self.input_csv.with_extension(""),
        }
    }
}
