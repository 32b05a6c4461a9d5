use std::path::PathBuf;

use crate::data::model::{Dataset, DatasetError};

// ---------------------------------------------------------------------------
// Plot configuration
// ---------------------------------------------------------------------------

/// Which file to read, which columns to plot and what to call the chart.
#[derive(Debug, Clone)]
pub struct PlotSpec {
    pub data_path: PathBuf,
    pub x_column: String,
    pub y_column: String,
    pub title: String,
}

impl Default for PlotSpec {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data.csv"),
            x_column: "Grid size".to_string(),
            y_column: "Backtracks".to_string(),
            title: "Grid size vs Backtracks".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// ScatterPlot – everything the renderer needs, independent of egui
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// One `[x, y]` per plotted row, in row order.
    pub points: Vec<[f64; 2]>,
    /// Distinct x values, ascending.
    pub x_ticks: Vec<f64>,
}

impl ScatterPlot {
    /// Extract points and ticks for `spec`'s columns.
    ///
    /// Rows with an empty cell in either column are not plotted, but every
    /// present x value still gets a tick.
    pub fn from_dataset(dataset: &Dataset, spec: &PlotSpec) -> Result<Self, DatasetError> {
        let xs = dataset.numeric_column(&spec.x_column)?;
        let ys = dataset.numeric_column(&spec.y_column)?;

        let points: Vec<[f64; 2]> = xs
            .iter()
            .zip(ys.iter())
            .filter_map(|(x, y)| Some([(*x)?, (*y)?]))
            .collect();

        let skipped = dataset.len() - points.len();
        if skipped > 0 {
            log::warn!("Skipped {skipped} rows with empty cells");
        }

        let x_ticks = distinct_ticks(xs.iter().flatten().copied());
        log::info!(
            "Plotting {} points with {} x ticks",
            points.len(),
            x_ticks.len()
        );

        Ok(ScatterPlot {
            title: spec.title.clone(),
            x_label: spec.x_column.clone(),
            y_label: spec.y_column.clone(),
            points,
            x_ticks,
        })
    }
}

/// Sorted, deduplicated tick positions.
pub fn distinct_ticks(values: impl IntoIterator<Item = f64>) -> Vec<f64> {
    let mut ticks: Vec<f64> = values.into_iter().collect();
    ticks.sort_by(f64::total_cmp);
    ticks.dedup_by(|a, b| a.total_cmp(b).is_eq());
    ticks
}

/// Axis label for a tick: integral values without a fractional part,
/// everything else with trailing zeros trimmed. Values too small for six
/// decimals use the shortest round-trip form.
pub fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let formatted = format!("{value:.6}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "0" || trimmed == "-0" {
        return format!("{value}");
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_reader;

    fn plot_csv(text: &str) -> Result<ScatterPlot, DatasetError> {
        let ds = load_reader(text.as_bytes()).unwrap();
        ScatterPlot::from_dataset(&ds, &PlotSpec::default())
    }

    #[test]
    fn one_point_per_row_in_row_order() {
        let plot = plot_csv("Grid size,Backtracks\n2,5\n3,10\n3,8\n4,1\n").unwrap();
        assert_eq!(
            plot.points,
            vec![[2.0, 5.0], [3.0, 10.0], [3.0, 8.0], [4.0, 1.0]]
        );
    }

    #[test]
    fn ticks_are_distinct_grid_sizes() {
        let plot = plot_csv("Grid size,Backtracks\n2,5\n3,10\n3,8\n4,1\n").unwrap();
        assert_eq!(plot.x_ticks, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn ticks_are_sorted_ascending() {
        let plot = plot_csv("Grid size,Backtracks\n9,1\n4,2\n16,3\n4,4\n").unwrap();
        assert_eq!(plot.x_ticks, vec![4.0, 9.0, 16.0]);
    }

    #[test]
    fn title_and_labels_come_from_spec() {
        let plot = plot_csv("Backtracks,Grid size\n1,2\n").unwrap();
        assert_eq!(plot.title, "Grid size vs Backtracks");
        assert_eq!(plot.x_label, "Grid size");
        assert_eq!(plot.y_label, "Backtracks");
        assert_eq!(plot.points, vec![[2.0, 1.0]]);
    }

    #[test]
    fn header_only_gives_no_points_and_no_ticks() {
        let plot = plot_csv("Grid size,Backtracks\n").unwrap();
        assert!(plot.points.is_empty());
        assert!(plot.x_ticks.is_empty());
        assert_eq!(plot.title, "Grid size vs Backtracks");
    }

    #[test]
    fn missing_y_column_fails() {
        let err = plot_csv("Grid size,Steps\n2,5\n").unwrap_err();
        assert_eq!(err, DatasetError::MissingColumn("Backtracks".into()));
    }

    #[test]
    fn missing_column_fails_even_without_rows() {
        let err = plot_csv("Grid size\n").unwrap_err();
        assert_eq!(err, DatasetError::MissingColumn("Backtracks".into()));
    }

    #[test]
    fn non_numeric_cell_fails() {
        let err = plot_csv("Grid size,Backtracks\n2,many\n").unwrap_err();
        assert!(matches!(err, DatasetError::NotNumeric { row: 0, .. }));
    }

    #[test]
    fn rows_with_empty_cells_are_skipped() {
        let plot = plot_csv("Grid size,Backtracks\n2,5\n,7\n5,\n6,0\n").unwrap();
        assert_eq!(plot.points, vec![[2.0, 5.0], [6.0, 0.0]]);
        assert_eq!(plot.x_ticks, vec![2.0, 5.0, 6.0]);
    }

    #[test]
    fn grid_size_without_backtracks_still_gets_a_tick() {
        let plot = plot_csv("Grid size,Backtracks\n2,5\n5,\n").unwrap();
        assert_eq!(plot.points, vec![[2.0, 5.0]]);
        assert_eq!(plot.x_ticks, vec![2.0, 5.0]);
    }

    #[test]
    fn distinct_ticks_sorts_and_dedups() {
        assert_eq!(distinct_ticks([3.0, 2.0, 3.0, 2.0]), vec![2.0, 3.0]);
        assert!(distinct_ticks(Vec::new()).is_empty());
    }

    #[test]
    fn tick_labels() {
        assert_eq!(format_tick(4.0), "4");
        assert_eq!(format_tick(-12.0), "-12");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(0.125), "0.125");
        assert_eq!(format_tick(1e-7), "0.0000001");
        assert_eq!(format_tick(-1e-7), "-0.0000001");
    }
}
