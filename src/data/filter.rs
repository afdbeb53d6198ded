use super::model::{BenchmarkTable, Measurement};

// ---------------------------------------------------------------------------
// Point series: the rows a chart curve is drawn from
// ---------------------------------------------------------------------------

/// `(x, y)` points of one curve, ordered by ascending x.
pub type Points = Vec<(f64, f64)>;

/// Serial baseline: `(Vertices, Time_ms)` of every serial run.
pub fn serial_series(table: &BenchmarkTable) -> Points {
    collect_sorted(table.serial(), |m| m.vertices as f64)
}

/// One `(Vertices, Time_ms)` curve per distinct thread count, in ascending
/// thread order.
pub fn parallel_series_by_threads(table: &BenchmarkTable) -> Vec<(u32, Points)> {
    table
        .thread_counts()
        .into_iter()
        .map(|threads| {
            let points = collect_sorted(
                table.parallel().filter(|m| m.threads == Some(threads)),
                |m| m.vertices as f64,
            );
            (threads, points)
        })
        .collect()
}

/// `(Threads, Time_ms)` of the parallel runs on a graph of exactly
/// `vertices` vertices.
pub fn scaling_series(table: &BenchmarkTable, vertices: u64) -> Points {
    collect_sorted(
        table
            .parallel()
            .filter(|m| m.vertices == vertices && m.threads.is_some()),
        |m| m.threads.map(f64::from).unwrap_or_default(),
    )
}

fn collect_sorted<'a, I, F>(rows: I, x_of: F) -> Points
where
    I: Iterator<Item = &'a Measurement>,
    F: Fn(&Measurement) -> f64,
{
    let mut points: Points = rows.map(|m| (x_of(m), m.time_ms)).collect();
    // `sort_by` is stable: duplicate x values keep file order.
    points.sort_by(|a, b| a.0.total_cmp(&b.0));
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::RunType;

    fn table() -> BenchmarkTable {
        let rows = [
            (RunType::Serial, 50000, None, 60.0),
            (RunType::Serial, 1000, None, 1.2),
            (RunType::Parallel, 1000, Some(4), 0.5),
            (RunType::Parallel, 50000, Some(4), 18.0),
            (RunType::Parallel, 50000, Some(2), 33.0),
            (RunType::Parallel, 1000, Some(2), 0.8),
            (RunType::Parallel, 10000, Some(8), 3.0),
        ];
        BenchmarkTable::from_rows(
            rows.into_iter()
                .map(|(run_type, vertices, threads, time_ms)| Measurement {
                    run_type,
                    vertices,
                    threads,
                    time_ms,
                })
                .collect(),
        )
    }

    #[test]
    fn serial_points_sorted_by_vertices() {
        assert_eq!(serial_series(&table()), vec![(1000.0, 1.2), (50000.0, 60.0)]);
    }

    #[test]
    fn parallel_curves_grouped_by_thread_count() {
        let curves = parallel_series_by_threads(&table());
        let threads: Vec<u32> = curves.iter().map(|(t, _)| *t).collect();
        assert_eq!(threads, vec![2, 4, 8]);

        assert_eq!(curves[0].1, vec![(1000.0, 0.8), (50000.0, 33.0)]);
        assert_eq!(curves[1].1, vec![(1000.0, 0.5), (50000.0, 18.0)]);
        assert_eq!(curves[2].1, vec![(10000.0, 3.0)]);
    }

    #[test]
    fn scaling_selects_one_graph_size() {
        assert_eq!(scaling_series(&table(), 50000), vec![(2.0, 33.0), (4.0, 18.0)]);
    }

    #[test]
    fn scaling_for_absent_size_is_empty() {
        assert!(scaling_series(&table(), 123).is_empty());
    }

    #[test]
    fn duplicate_x_keep_file_order() {
        let rows = vec![
            Measurement {
                run_type: RunType::Serial,
                vertices: 10,
                threads: None,
                time_ms: 2.0,
            },
            Measurement {
                run_type: RunType::Serial,
                vertices: 10,
                threads: None,
                time_ms: 1.0,
            },
        ];
        let points = serial_series(&BenchmarkTable::from_rows(rows));
        assert_eq!(points, vec![(10.0, 2.0), (10.0, 1.0)]);
    }
}
