//! Backend-independent chart descriptions.
//!
//! Both the PNG renderer and the interactive viewer draw from a
//! [`ChartSpec`], so the two outputs always agree on titles, series and
//! colours.

use std::ops::Range;

use crate::color::{ChartColor, generate_palette};
use crate::data::filter::{Points, parallel_series_by_threads, scaling_series, serial_series};
use crate::data::model::BenchmarkTable;

/// File name of the time-vs-size chart.
pub const SIZE_CHART_FILE: &str = "bfs_time_vs_size_advanced.png";
/// File name of the time-vs-threads chart.
pub const SCALING_CHART_FILE: &str = "bfs_time_vs_threads_advanced.png";
/// Graph size the scaling chart is drawn for unless configured otherwise.
pub const DEFAULT_SCALING_VERTICES: u64 = 50_000;

/// Fraction of the data span added on each side of an axis.
const AXIS_MARGIN: f64 = 0.05;

// ---------------------------------------------------------------------------
// Chart description types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub color: ChartColor,
    pub line: LineKind,
    /// Stroke width in pixels.
    pub width: u32,
    /// Draw a circle at every point.
    pub markers: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Points,
    pub style: SeriesStyle,
}

/// One figure: axes, labels and the curves drawn on it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
    /// Explicit x tick positions; `None` lets the backend choose.
    pub x_ticks: Option<Vec<f64>>,
    pub show_legend: bool,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.points.is_empty())
    }

    pub fn x_range(&self) -> Range<f64> {
        padded_range(self.series.iter().flat_map(|s| s.points.iter().map(|p| p.0)))
    }

    pub fn y_range(&self) -> Range<f64> {
        padded_range(self.series.iter().flat_map(|s| s.points.iter().map(|p| p.1)))
    }
}

// ---------------------------------------------------------------------------
// The two figures
// ---------------------------------------------------------------------------

/// Execution time vs. graph size: serial baseline plus one dashed curve per
/// parallel thread count.
pub fn size_chart(table: &BenchmarkTable) -> ChartSpec {
    let mut series = vec![Series {
        label: "Serial BFS".to_string(),
        points: serial_series(table),
        style: SeriesStyle {
            color: ChartColor::BLACK,
            line: LineKind::Solid,
            width: 2,
            markers: true,
        },
    }];

    let curves = parallel_series_by_threads(table);
    let palette = generate_palette(curves.len());
    for ((threads, points), color) in curves.into_iter().zip(palette) {
        series.push(Series {
            label: format!("Parallel BFS ({threads} threads)"),
            points,
            style: SeriesStyle {
                color,
                line: LineKind::Dashed,
                width: 1,
                markers: true,
            },
        });
    }

    ChartSpec {
        title: "BFS Performance: Serial vs Parallel".to_string(),
        x_label: "Number of vertices".to_string(),
        y_label: "Time (ms)".to_string(),
        series,
        x_ticks: None,
        show_legend: true,
    }
}

/// Execution time vs. thread count for graphs of `vertices` vertices.
pub fn scaling_chart(table: &BenchmarkTable, vertices: u64) -> ChartSpec {
    let points = scaling_series(table, vertices);
    let ticks = points.iter().map(|p| p.0).fold(Vec::new(), |mut ticks, x| {
        if ticks.last() != Some(&x) {
            ticks.push(x);
        }
        ticks
    });

    ChartSpec {
        title: format!("Parallel BFS Scaling with Number of Threads (V={vertices})"),
        x_label: "Number of threads".to_string(),
        y_label: "Time (ms)".to_string(),
        series: vec![Series {
            label: format!("Parallel BFS (V={vertices})"),
            points,
            style: SeriesStyle {
                color: ChartColor::RED,
                line: LineKind::Solid,
                width: 1,
                markers: true,
            },
        }],
        x_ticks: Some(ticks),
        show_legend: false,
    }
}

fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let span = max - min;
    let pad = if span > 0.0 {
        span * AXIS_MARGIN
    } else if min != 0.0 {
        min.abs() * AXIS_MARGIN
    } else {
        0.5
    };
    (min - pad)..(max + pad)
}
