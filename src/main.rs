mod app;
mod chart;
mod color;
mod config;
mod data;
mod render;
mod state;
mod ui;

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use chart::{ChartSpec, SCALING_CHART_FILE, SIZE_CHART_FILE, scaling_chart, size_chart};
use config::Config;
use data::loader::load_csv;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let config = Config::parse();
    let table = load_csv(&config.input)
        .with_context(|| format!("loading benchmark results from {}", config.input.display()))?;
    log::info!(
        "Loaded {} measurements ({} serial, {} parallel) from {}",
        table.len(),
        table.serial().count(),
        table.parallel().count(),
        config.input.display()
    );
    if table.is_empty() {
        log::warn!("{} has no measurements; charts will be empty", config.input.display());
    }

    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("creating output directory {}", config.out_dir.display()))?;

    let size = size_chart(&table);
    let scaling = scaling_chart(&table, config.scaling_vertices);
    write_chart(&config, &size, SIZE_CHART_FILE)?;
    write_chart(&config, &scaling, SCALING_CHART_FILE)?;

    if config.show {
        let mut state = AppState::new(config.scaling_vertices);
        state.set_table(table, Some(config.input.clone()));
        app::run_viewer(state).map_err(|e| anyhow::anyhow!("viewer failed: {e}"))?;
    }

    Ok(())
}

fn write_chart(config: &Config, spec: &ChartSpec, file_name: &str) -> Result<()> {
    for series in &spec.series {
        log::debug!("{}: '{}' has {} points", file_name, series.label, series.points.len());
    }
    if spec.is_empty() {
        log::warn!("'{}' has no data points", spec.title);
    }

    let path = config.out_dir.join(file_name);
    render::render_png(spec, &path, config.width, config.height)
        .with_context(|| format!("rendering {}", path.display()))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}
