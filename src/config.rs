use std::path::PathBuf;

use clap::Parser;

use crate::chart::DEFAULT_SCALING_VERTICES;

/// Largest accepted PNG edge, in pixels.
pub const MAX_IMAGE_EDGE: i64 = 16_384;

/// Chart BFS benchmark results: serial vs parallel timings and thread scaling.
///
/// With no flags, reads `tmp/results.csv` and writes
/// `bfs_time_vs_size_advanced.png` and `bfs_time_vs_threads_advanced.png`
/// into the current directory.
#[derive(Debug, Clone, Parser)]
#[command(name = "bfs-plot", version, about)]
pub struct Config {
    /// Benchmark results CSV (columns: Type, Vertices, Threads, Time_ms)
    #[arg(short, long, default_value = "tmp/results.csv")]
    pub input: PathBuf,

    /// Directory the two PNG charts are written to
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Graph size (vertex count) used for the thread-scaling chart
    #[arg(short, long, default_value_t = DEFAULT_SCALING_VERTICES)]
    pub scaling_vertices: u64,

    /// Width of each PNG in pixels
    #[arg(long, default_value_t = 1200, value_parser = clap::value_parser!(u32).range(1..=MAX_IMAGE_EDGE))]
    pub width: u32,

    /// Height of each PNG in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..=MAX_IMAGE_EDGE))]
    pub height: u32,

    /// Open an interactive window with both charts after writing them
    #[arg(long)]
    pub show: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Config::command().debug_assert();
    }

    #[test]
    fn defaults_read_tmp_results_into_cwd() {
        let config = Config::try_parse_from(["bfs-plot"]).unwrap();
        assert_eq!(config.input, PathBuf::from("tmp/results.csv"));
        assert_eq!(config.out_dir, PathBuf::from("."));
        assert_eq!(config.scaling_vertices, 50_000);
        assert_eq!((config.width, config.height), (1200, 600));
        assert!(!config.show);
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "bfs-plot", "-i", "runs.csv", "-o", "out", "-s", "1000", "--width", "800", "--show",
        ])
        .unwrap();
        assert_eq!(config.input, PathBuf::from("runs.csv"));
        assert_eq!(config.out_dir, PathBuf::from("out"));
        assert_eq!(config.scaling_vertices, 1000);
        assert_eq!(config.width, 800);
        assert!(config.show);
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(Config::try_parse_from(["bfs-plot", "--width", "0"]).is_err());
    }

    #[test]
    fn image_edges_are_bounded() {
        let edge = MAX_IMAGE_EDGE.to_string();
        let config =
            Config::try_parse_from(["bfs-plot", "--width", edge.as_str(), "--height", edge.as_str()])
                .unwrap();
        assert_eq!(i64::from(config.width), MAX_IMAGE_EDGE);

        let too_big = (MAX_IMAGE_EDGE + 1).to_string();
        assert!(Config::try_parse_from(["bfs-plot", "--width", too_big.as_str()]).is_err());
        assert!(Config::try_parse_from(["bfs-plot", "--height", "100000"]).is_err());
    }
}
