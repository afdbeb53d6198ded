use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::chart::{ChartSpec, scaling_chart, size_chart};
use crate::data::loader::load_csv;
use crate::data::model::BenchmarkTable;

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// Which of the two charts the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartTab {
    #[default]
    TimeVsSize,
    TimeVsThreads,
}

/// The full viewer state, independent of rendering.
pub struct AppState {
    /// Loaded results (None until a file has been loaded).
    pub table: Option<BenchmarkTable>,

    /// File the current table was read from.
    pub source: Option<PathBuf>,

    /// Graph size the scaling chart is drawn for.
    pub scaling_vertices: u64,

    /// Chart descriptions rebuilt on every load.
    pub size_chart: Option<ChartSpec>,
    pub scaling_chart: Option<ChartSpec>,

    pub tab: ChartTab,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(scaling_vertices: u64) -> Self {
        Self {
            table: None,
            source: None,
            scaling_vertices,
            size_chart: None,
            scaling_chart: None,
            tab: ChartTab::default(),
            status_message: None,
        }
    }

    /// Ingest a loaded table and rebuild both charts.
    pub fn set_table(&mut self, table: BenchmarkTable, source: Option<PathBuf>) {
        self.size_chart = Some(size_chart(&table));
        self.scaling_chart = Some(scaling_chart(&table, self.scaling_vertices));
        self.table = Some(table);
        self.source = source;
        self.status_message = None;
    }

    /// Load a results file, keeping the current table if it fails.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let table = load_csv(path).with_context(|| format!("loading {}", path.display()))?;
        log::info!("Loaded {} measurements from {}", table.len(), path.display());
        self.set_table(table, Some(path.to_path_buf()));
        Ok(())
    }

    /// Chart for the active tab.
    pub fn active_chart(&self) -> Option<&ChartSpec> {
        match self.tab {
            ChartTab::TimeVsSize => self.size_chart.as_ref(),
            ChartTab::TimeVsThreads => self.scaling_chart.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::loader::read_csv;

    const CSV: &str = "Type,Vertices,Threads,Time_ms\nSerial,100,,2.0\nParallel,100,2,1.0\n";

    #[test]
    fn set_table_builds_both_charts() {
        let mut state = AppState::new(100);
        assert!(state.active_chart().is_none());

        state.set_table(read_csv(CSV.as_bytes()).unwrap(), None);
        assert_eq!(
            state.active_chart().map(|c| c.title.as_str()),
            Some("BFS Performance: Serial vs Parallel")
        );

        state.tab = ChartTab::TimeVsThreads;
        let scaling = state.active_chart().unwrap();
        assert_eq!(scaling.series[0].points, vec![(2.0, 1.0)]);
    }

    #[test]
    fn failed_load_keeps_previous_table() {
        let mut state = AppState::new(100);
        state.set_table(read_csv(CSV.as_bytes()).unwrap(), None);

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        bad.write_all(b"Type,Vertices\nSerial,1\n").unwrap();

        let err = state.load(bad.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Threads"));
        assert_eq!(state.table.as_ref().map(|t| t.len()), Some(2));
    }

    #[test]
    fn successful_load_records_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();

        let mut state = AppState::new(100);
        state.load(file.path()).unwrap();
        assert_eq!(state.source.as_deref(), Some(file.path()));
    }
}
