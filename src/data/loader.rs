use std::fs::File;
use std::io;
use std::path::Path;

use serde::Deserialize;

use super::error::DataError;
use super::model::{BenchmarkTable, Measurement, RunType};

/// Columns every results file must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Type", "Vertices", "Threads", "Time_ms"];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a benchmark results CSV from disk.
///
/// Layout: header row naming at least `Type`, `Vertices`, `Threads` and
/// `Time_ms`, in any order. Other columns are ignored. `Threads` may be
/// empty for serial runs.
pub fn load_csv(path: &Path) -> Result<BenchmarkTable, DataError> {
    let file = File::open(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(io::BufReader::new(file))
}

/// Same as [`load_csv`] but from any reader.
pub fn read_csv<R: io::Read>(input: R) -> Result<BenchmarkTable, DataError> {
    read_records(builder().from_reader(input))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Type")]
    run_type: String,
    #[serde(rename = "Vertices")]
    vertices: u64,
    #[serde(rename = "Threads")]
    threads: Option<u32>,
    #[serde(rename = "Time_ms")]
    time_ms: f64,
}

fn builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).trim(csv::Trim::All);
    builder
}

fn read_records<R: io::Read>(mut reader: csv::Reader<R>) -> Result<BenchmarkTable, DataError> {
    let headers = reader.headers().map_err(DataError::Header)?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataError::MissingColumn(column));
        }
    }

    let mut rows = Vec::new();
    for (i, result) in reader.deserialize::<RawRow>().enumerate() {
        let row = i + 1;
        let raw = result.map_err(|source| DataError::Row { row, source })?;
        rows.push(validate(raw, row)?);
    }

    Ok(BenchmarkTable::from_rows(rows))
}

fn validate(raw: RawRow, row: usize) -> Result<Measurement, DataError> {
    let run_type = RunType::parse(&raw.run_type).ok_or_else(|| DataError::UnknownRunType {
        row,
        value: raw.run_type.clone(),
    })?;

    if !raw.time_ms.is_finite() || raw.time_ms < 0.0 {
        return Err(DataError::InvalidTime {
            row,
            value: raw.time_ms,
        });
    }

    if run_type == RunType::Parallel && raw.threads.is_none() {
        return Err(DataError::MissingThreads { row });
    }

    Ok(Measurement {
        run_type,
        vertices: raw.vertices,
        threads: raw.threads,
        time_ms: raw.time_ms,
    })
}
