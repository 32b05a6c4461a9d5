use eframe::egui::{Align, Layout, RichText, Ui};

use crate::scatter::ScatterPlot;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the chart title with a short summary underneath.
pub fn title_bar(ui: &mut Ui, plot: &ScatterPlot) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new(&plot.title).strong());
    });

    ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
        ui.label(format!(
            "{} points, {} distinct {}",
            plot.points.len(),
            plot.x_ticks.len(),
            plot.x_label
        ));
    });
}
