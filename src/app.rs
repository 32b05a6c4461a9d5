use anyhow::{Result, anyhow};
use eframe::egui;

use crate::scatter::ScatterPlot;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ScatterApp {
    pub plot: ScatterPlot,
}

impl ScatterApp {
    pub fn new(plot: ScatterPlot) -> Self {
        Self { plot }
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            panels::title_bar(ui, &self.plot);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_plot(ui, &self.plot);
        });
    }
}

/// Open the viewer window and block until the user closes it.
pub fn run(plot: ScatterPlot) -> Result<()> {
    let title = plot.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([480.0, 320.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ScatterApp::new(plot)))),
    )
    .map_err(|e| anyhow!("running viewer: {e}"))
}
