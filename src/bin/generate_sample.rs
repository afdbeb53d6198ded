//! Write a synthetic `results.csv` in the layout `bfs-plot` reads, so the
//! charts can be tried without running the BFS benchmark.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

const VERTICES: [u64; 6] = [1_000, 5_000, 10_000, 20_000, 35_000, 50_000];
const THREADS: [u32; 4] = [1, 2, 4, 8];

/// Serial cost per vertex, ms.
const SERIAL_MS_PER_VERTEX: f64 = 0.0012;
/// Fraction of ideal speedup each extra thread delivers.
const PARALLEL_EFFICIENCY: f64 = 0.8;
/// Per-thread synchronisation overhead, ms.
const THREAD_OVERHEAD_MS: f64 = 0.35;

#[derive(Debug, Serialize)]
struct Row {
    #[serde(rename = "Type")]
    run_type: &'static str,
    #[serde(rename = "Vertices")]
    vertices: u64,
    #[serde(rename = "Threads")]
    threads: Option<u32>,
    #[serde(rename = "Time_ms")]
    time_ms: f64,
}

/// Deterministic jitter source (splitmix64).
struct Jitter(u64);

impl Jitter {
    /// Multiplicative noise in `[1 - amount, 1 + amount)`.
    fn factor(&mut self, amount: f64) -> f64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        let unit = (z >> 11) as f64 / (1u64 << 53) as f64;
        1.0 + amount * (2.0 * unit - 1.0)
    }
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tmp/results.csv"));

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    let mut jitter = Jitter(42);
    let mut rows = 0;

    for &vertices in &VERTICES {
        let serial_ms = vertices as f64 * SERIAL_MS_PER_VERTEX;
        writer.serialize(Row {
            run_type: "Serial",
            vertices,
            threads: None,
            time_ms: round3(serial_ms * jitter.factor(0.03)),
        })?;
        rows += 1;

        for &threads in &THREADS {
            let speedup = 1.0 + (threads as f64 - 1.0) * PARALLEL_EFFICIENCY;
            let parallel_ms = serial_ms / speedup + THREAD_OVERHEAD_MS * threads as f64;
            writer.serialize(Row {
                run_type: "Parallel",
                vertices,
                threads: Some(threads),
                time_ms: round3(parallel_ms * jitter.factor(0.05)),
            })?;
            rows += 1;
        }
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {rows} measurements to {}", output_path.display());
    Ok(())
}
