use chrono::{DateTime, Utc};
use eframe::egui::Ui;
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Line, Plot, PlotPoints, Points};

use crate::models::TickerSnapshot;
use crate::ui::config::UI_CONFIG;

/// Renders the price series of the current snapshot.
#[derive(Default)]
pub struct ChartView;

impl ChartView {
    pub fn show(&self, ui: &mut Ui, snapshot: &TickerSnapshot) {
        let points: Vec<[f64; 2]> = snapshot
            .series
            .iter()
            .map(|p| [p.timestamp.timestamp() as f64, p.value])
            .collect();

        let legend = Legend::default().position(Corner::RightTop);
        let series_name = format!("{} Prev Close", snapshot.ticker);

        Plot::new("price_chart")
            .legend(legend)
            .custom_x_axes(vec![create_x_axis()])
            .custom_y_axes(vec![create_y_axis()])
            .allow_scroll(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(series_name.as_str(), PlotPoints::new(points.clone()))
                        .color(UI_CONFIG.colors.chart_line)
                        .width(2.0),
                );
                // A marker per point; a single Prev Close sample would
                // otherwise be invisible as a line.
                plot_ui.points(
                    Points::new(series_name.as_str(), PlotPoints::new(points))
                        .color(UI_CONFIG.colors.chart_line)
                        .radius(4.0),
                );
            });
    }
}

fn create_x_axis() -> AxisHints<'static> {
    AxisHints::new_x().formatter(|grid_mark, _range| {
        DateTime::<Utc>::from_timestamp(grid_mark.value as i64, 0)
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_default()
    })
}

fn create_y_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .formatter(|grid_mark, _range| format!("${:.2}", grid_mark.value))
        .placement(HPlacement::Left)
}
