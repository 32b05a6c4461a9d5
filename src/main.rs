mod app;
mod data;
mod scatter;
mod ui;

use anyhow::{Context, Result};

use scatter::{PlotSpec, ScatterPlot};

fn main() -> Result<()> {
    env_logger::init();

    let spec = PlotSpec::default();

    let dataset = data::loader::load_file(&spec.data_path)?;
    if dataset.is_empty() {
        log::warn!("{} has no rows, showing an empty plot", spec.data_path.display());
    }

    let plot = ScatterPlot::from_dataset(&dataset, &spec)
        .with_context(|| format!("plotting {}", spec.data_path.display()))?;

    app::run(plot)
}
