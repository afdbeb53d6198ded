use eframe::egui::Ui;
use egui_plot::{GridMark, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoints, Points};

use crate::chart::LineKind;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Chart plot (central panel)
// ---------------------------------------------------------------------------

/// Render the active chart in the central panel.
pub fn chart_plot(ui: &mut Ui, state: &AppState) {
    let chart = match state.active_chart() {
        Some(chart) => chart,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a results file to view charts  (File → Open…)");
            });
            return;
        }
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&chart.title);
    });

    let mut plot = Plot::new(chart.title.as_str())
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if chart.show_legend {
        plot = plot.legend(Legend::default());
    }
    if let Some(ticks) = &chart.x_ticks {
        let marks = tick_marks(ticks);
        plot = plot
            .x_grid_spacer(move |_input| marks.clone())
            .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value));
    }

    plot.show(ui, |plot_ui| {
        for series in &chart.series {
            let color = series.style.color.to_color32();
            let coords = || -> PlotPoints { series.points.iter().map(|&(x, y)| [x, y]).collect() };

            let line_style = match series.style.line {
                LineKind::Solid => LineStyle::Solid,
                LineKind::Dashed => LineStyle::dashed_loose(),
            };
            plot_ui.line(
                Line::new(coords())
                    .name(&series.label)
                    .color(color)
                    .width(series.style.width as f32 + 0.5)
                    .style(line_style),
            );

            if series.style.markers {
                plot_ui.points(
                    Points::new(coords())
                        .name(&series.label)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(3.5),
                );
            }
        }
    });
}

/// Grid marks at exactly the given x positions. Every mark shares one step
/// size (the smallest gap between ticks) so egui draws them with equal weight.
fn tick_marks(ticks: &[f64]) -> Vec<GridMark> {
    let step_size = ticks
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .filter(|gap| *gap > 0.0)
        .fold(f64::INFINITY, f64::min);
    let step_size = if step_size.is_finite() { step_size } else { 1.0 };

    ticks
        .iter()
        .map(|&value| GridMark { value, step_size })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_sit_exactly_on_ticks() {
        let marks = tick_marks(&[1.0, 2.0, 4.0, 8.0]);
        let values: Vec<f64> = marks.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![1.0, 2.0, 4.0, 8.0]);
        assert!(marks.iter().all(|m| m.step_size == 1.0));
    }

    #[test]
    fn single_tick_uses_unit_step() {
        let marks = tick_marks(&[16.0]);
        assert_eq!(marks.len(), 1);
        assert_eq!(marks[0].step_size, 1.0);
    }

    #[test]
    fn no_ticks_no_marks() {
        assert!(tick_marks(&[]).is_empty());
    }
}
