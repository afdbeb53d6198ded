use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while reading a results file.
///
/// Row numbers are 1-based and count data rows only (the header is not a row).
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read CSV header")]
    Header(#[source] csv::Error),

    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),

    #[error("row {row}: malformed record")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: unknown run type '{value}' (expected Serial or Parallel)")]
    UnknownRunType { row: usize, value: String },

    #[error("row {row}: invalid Time_ms value {value}")]
    InvalidTime { row: usize, value: f64 },

    #[error("row {row}: Parallel run has no thread count")]
    MissingThreads { row: usize },
}
