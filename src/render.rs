use std::borrow::Cow;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use eframe::egui::FontDefinitions;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontStyle, register_font};
use thiserror::Error;

use crate::chart::{ChartSpec, LineKind};

/// Family name every piece of chart text is drawn with.
const FONT_FAMILY: &str = "sans-serif";
/// Fonts bundled with egui, tried in order.
const EMBEDDED_FONTS: [&str; 2] = ["Ubuntu-Light", "Hack"];

const GRID: RGBColor = RGBColor(220, 220, 220);
const MARKER_RADIUS: u32 = 4;
const DASH_SIZE: u32 = 8;
const DASH_SPACING: u32 = 5;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no embedded font available for chart text")]
    FontUnavailable,

    #[error("failed to register embedded font '{0}'")]
    FontRegistration(&'static str),

    #[error("invalid image size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("drawing chart failed: {0}")]
    Draw(String),

    #[error("cannot write {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

fn draw_err<E: Display>(e: E) -> RenderError {
    RenderError::Draw(e.to_string())
}

// ---------------------------------------------------------------------------
// Font setup
// ---------------------------------------------------------------------------

/// Register the chart font with plotters. Runs once per process; the
/// outcome of the first call is returned to every caller.
fn ensure_font() -> Result<(), RenderError> {
    static REGISTERED: OnceLock<Result<(), RenderError>> = OnceLock::new();
    match REGISTERED.get_or_init(register_embedded_font) {
        Ok(()) => Ok(()),
        Err(RenderError::FontRegistration(name)) => Err(RenderError::FontRegistration(*name)),
        Err(_) => Err(RenderError::FontUnavailable),
    }
}

fn register_embedded_font() -> Result<(), RenderError> {
    let definitions = FontDefinitions::default();
    let (name, bytes) = EMBEDDED_FONTS
        .iter()
        .find_map(|name| match &definitions.font_data.get(*name)?.font {
            Cow::Borrowed(bytes) => Some((*name, *bytes)),
            Cow::Owned(_) => None,
        })
        .ok_or(RenderError::FontUnavailable)?;

    log::debug!("Registering embedded font {name} as {FONT_FAMILY}");
    register_font(FONT_FAMILY, FontStyle::Normal, bytes)
        .map_err(|_| RenderError::FontRegistration(name))
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw `spec` into a packed RGB8 buffer of `width * height` pixels.
pub fn render_rgb(spec: &ChartSpec, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidSize { width, height });
    }
    ensure_font()?;

    let mut buffer = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw_chart(&root, spec)?;
        root.present().map_err(draw_err)?;
    }
    Ok(buffer)
}

/// Render `spec` and write it to `path` as a PNG, replacing any existing file.
pub fn render_png(spec: &ChartSpec, path: &Path, width: u32, height: u32) -> Result<(), RenderError> {
    let buffer = render_rgb(spec, width, height)?;
    let image = image::RgbImage::from_raw(width, height, buffer)
        .ok_or(RenderError::InvalidSize { width, height })?;
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| RenderError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

fn draw_chart(root: &DrawingArea<BitMapBackend<'_>, Shift>, spec: &ChartSpec) -> Result<(), RenderError> {
    root.fill(&WHITE).map_err(draw_err)?;

    let x_range = spec.x_range();
    let y_range = spec.y_range();

    let mut chart = ChartBuilder::on(root)
        .caption(&spec.title, (FONT_FAMILY, 26))
        .margin(20)
        .x_label_area_size(55)
        .y_label_area_size(75)
        .build_cartesian_2d(x_range.clone(), y_range.clone())
        .map_err(draw_err)?;

    let whole = |v: &f64| format!("{v:.0}");
    let blank = |_: &f64| String::new();
    let time = |v: &f64| format!("{v:.1}");

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&spec.x_label)
        .y_desc(&spec.y_label)
        .label_style((FONT_FAMILY, 15))
        .axis_desc_style((FONT_FAMILY, 18))
        .bold_line_style(GRID.stroke_width(1))
        .light_line_style(WHITE.stroke_width(0))
        .x_label_formatter(&whole)
        .y_label_formatter(&time);
    if spec.x_ticks.is_some() {
        // Ticks are drawn by hand at exact data positions below.
        mesh.disable_x_mesh()
            .x_label_formatter(&blank)
            .set_tick_mark_size(LabelAreaPosition::Bottom, 0);
    }
    mesh.draw().map_err(draw_err)?;

    if let Some(ticks) = &spec.x_ticks {
        chart
            .draw_series(ticks.iter().map(|&t| {
                PathElement::new(vec![(t, y_range.start), (t, y_range.end)], GRID.stroke_width(1))
            }))
            .map_err(draw_err)?;

        let tick_style = TextStyle::from((FONT_FAMILY, 15).into_font())
            .pos(Pos::new(HPos::Center, VPos::Top));
        for &t in ticks {
            let (px, py) = chart.backend_coord(&(t, y_range.start));
            root.draw(&PathElement::new(vec![(px, py), (px, py + 5)], BLACK.stroke_width(1)))
                .map_err(draw_err)?;
            root.draw(&Text::new(format!("{t:.0}"), (px, py + 8), tick_style.clone()))
                .map_err(draw_err)?;
        }
    }

    for series in &spec.series {
        if series.points.is_empty() {
            continue;
        }
        let style = series
            .style
            .color
            .to_plotters()
            .stroke_width(series.style.width);

        let annotation = match series.style.line {
            LineKind::Solid => chart
                .draw_series(LineSeries::new(series.points.iter().copied(), style))
                .map_err(draw_err)?,
            LineKind::Dashed => chart
                .draw_series(DashedLineSeries::new(
                    series.points.iter().copied(),
                    DASH_SIZE,
                    DASH_SPACING,
                    style,
                ))
                .map_err(draw_err)?,
        };
        annotation
            .label(series.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], style));

        if series.style.markers {
            let fill = series.style.color.to_plotters().filled();
            chart
                .draw_series(
                    series
                        .points
                        .iter()
                        .map(|&p| Circle::new(p, MARKER_RADIUS, fill)),
                )
                .map_err(draw_err)?;
        }
    }

    if spec.show_legend && !spec.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font((FONT_FAMILY, 15))
            .background_style(&WHITE.mix(0.85))
            .border_style(&BLACK)
            .draw()
            .map_err(draw_err)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{DEFAULT_SCALING_VERTICES, scaling_chart, size_chart};
    use crate::data::loader::read_csv;
    use crate::data::model::BenchmarkTable;

    fn table() -> BenchmarkTable {
        read_csv(
            "\
Type,Vertices,Threads,Time_ms
Serial,1000,,1.0
Serial,50000,,50.0
Parallel,1000,2,0.7
Parallel,50000,2,26.0
Parallel,1000,4,0.5
Parallel,50000,4,14.0
"
            .as_bytes(),
        )
        .unwrap()
    }

    #[test]
    fn renders_a_non_blank_buffer() {
        let buffer = render_rgb(&size_chart(&table()), 400, 200).unwrap();
        assert_eq!(buffer.len(), 400 * 200 * 3);
        // Background is white; lines and text are not.
        assert!(buffer.iter().any(|&b| b != 255));
    }

    #[test]
    fn writes_png_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaling.png");
        render_png(&scaling_chart(&table(), DEFAULT_SCALING_VERTICES), &path, 320, 160).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (320, 160));
    }

    #[test]
    fn empty_chart_still_renders() {
        let spec = scaling_chart(&table(), 3);
        assert!(spec.is_empty());
        render_rgb(&spec, 200, 100).unwrap();
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = render_rgb(&size_chart(&table()), 0, 100).unwrap_err();
        assert!(matches!(err, RenderError::InvalidSize { width: 0, height: 100 }));
    }
}
