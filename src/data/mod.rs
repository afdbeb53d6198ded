/// Data layer: benchmark rows, CSV loading, and series selection.
///
/// Architecture:
/// ```text
///   results.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate rows → BenchmarkTable
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ BenchmarkTable  │  Vec<Measurement>, file order
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  group / select rows → (x, y) point series
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
