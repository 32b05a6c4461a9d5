use eframe::egui::{Color32, Ui};
use egui_plot::{GridMark, MarkerShape, Plot, PlotPoints, Points};

use crate::scatter::{ScatterPlot, format_tick};

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the scatter plot in the central panel.
///
/// The x axis only gets grid marks at `plot.x_ticks`.
pub fn scatter_plot(ui: &mut Ui, plot: &ScatterPlot) {
    let ticks = plot.x_ticks.clone();

    Plot::new("scatter_plot")
        .x_axis_label(plot.x_label.as_str())
        .y_axis_label(plot.y_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        // All marks share one large step size so every tick gets a label.
        .x_grid_spacer(move |input| {
            let span = (input.bounds.1 - input.bounds.0).abs().max(1.0);
            ticks
                .iter()
                .map(|&value| GridMark {
                    value,
                    step_size: span,
                })
                .collect()
        })
        .x_axis_formatter(|mark, _range| format_tick(mark.value))
        .show(ui, |plot_ui| {
            let points: PlotPoints = plot.points.iter().copied().collect();
            plot_ui.points(
                Points::new(points)
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(4.0)
                    .color(Color32::LIGHT_BLUE)
                    .name(plot.y_label.as_str()),
            );
        });
}
