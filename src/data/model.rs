use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// RunType – the `Type` column
// ---------------------------------------------------------------------------

/// Execution mode of a benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RunType {
    Serial,
    Parallel,
}

impl RunType {
    /// Parse the `Type` cell. Exact match after trimming whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Serial" => Some(RunType::Serial),
            "Parallel" => Some(RunType::Parallel),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Measurement – one row of the results file
// ---------------------------------------------------------------------------

/// A single timing (one row of the results CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub run_type: RunType,
    /// Graph size.
    pub vertices: u64,
    /// Parallelism degree. Always `Some` for parallel runs.
    pub threads: Option<u32>,
    /// Measured latency in milliseconds (finite, non-negative).
    pub time_ms: f64,
}

impl Measurement {
    pub fn is_serial(&self) -> bool {
        self.run_type == RunType::Serial
    }

    pub fn is_parallel(&self) -> bool {
        self.run_type == RunType::Parallel
    }
}

// ---------------------------------------------------------------------------
// BenchmarkTable – the complete loaded file
// ---------------------------------------------------------------------------

/// All measurements in file order. Read once, never mutated.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkTable {
    rows: Vec<Measurement>,
}

impl BenchmarkTable {
    pub fn from_rows(rows: Vec<Measurement>) -> Self {
        BenchmarkTable { rows }
    }

    pub fn rows(&self) -> &[Measurement] {
        &self.rows
    }

    /// Number of measurements.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn serial(&self) -> impl Iterator<Item = &Measurement> {
        self.rows().iter().filter(|m| m.is_serial())
    }

    pub fn parallel(&self) -> impl Iterator<Item = &Measurement> {
        self.rows().iter().filter(|m| m.is_parallel())
    }

    /// Sorted, de-duplicated thread counts of the parallel runs.
    pub fn thread_counts(&self) -> Vec<u32> {
        self.parallel()
            .filter_map(|m| m.threads)
            .collect::<BTreeSet<u32>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(run_type: RunType, vertices: u64, threads: Option<u32>, time_ms: f64) -> Measurement {
        Measurement {
            run_type,
            vertices,
            threads,
            time_ms,
        }
    }

    #[test]
    fn run_type_parses_exact_names() {
        assert_eq!(RunType::parse("Serial"), Some(RunType::Serial));
        assert_eq!(RunType::parse(" Parallel "), Some(RunType::Parallel));
        assert_eq!(RunType::parse("parallel"), None);
        assert_eq!(RunType::parse(""), None);
    }

    #[test]
    fn thread_counts_are_sorted_and_unique() {
        let table = BenchmarkTable::from_rows(vec![
            row(RunType::Parallel, 1000, Some(8), 1.0),
            row(RunType::Serial, 1000, None, 4.0),
            row(RunType::Parallel, 1000, Some(2), 2.0),
            row(RunType::Parallel, 2000, Some(8), 1.5),
            row(RunType::Parallel, 2000, Some(4), 1.7),
        ]);
        assert_eq!(table.thread_counts(), vec![2, 4, 8]);
    }

    #[test]
    fn serial_thread_values_are_ignored_for_grouping() {
        let table = BenchmarkTable::from_rows(vec![
            row(RunType::Serial, 1000, Some(1), 4.0),
            row(RunType::Parallel, 1000, Some(2), 2.0),
        ]);
        assert_eq!(table.thread_counts(), vec![2]);
        assert_eq!(table.serial().count(), 1);
        assert_eq!(table.parallel().count(), 1);
    }

    #[test]
    fn empty_table() {
        let table = BenchmarkTable::default();
        assert!(table.is_empty());
        assert!(table.thread_counts().is_empty());
    }
}
