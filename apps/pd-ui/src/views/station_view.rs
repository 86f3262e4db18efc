use super::{category_formatter, category_spacer, color32};
use egui_plot::{Bar, BarChart, Plot, PlotBounds};
use pd_charts::StationChart;
use pd_charts::StationMetric;
use pd_charts::station::X_AXIS_LABEL;

pub struct StationView {
    metric: StationMetric,
}

impl StationView {
    pub fn new(metric: StationMetric) -> Self {
        Self { metric }
    }

    pub fn show(&self, ui: &mut egui::Ui, chart: Option<&StationChart>, height: f32) {
        let Some(chart) = chart.filter(|c| c.metric == self.metric) else {
            ui.heading(self.metric.title_base());
            ui.label("Waiting for the next replay period");
            return;
        };

        ui.heading(&chart.title);

        let Some(y) = chart.y else {
            ui.label("No stations in this period");
            return;
        };

        let bars: Vec<Bar> = chart
            .bars
            .iter()
            .map(|bar| {
                Bar::new(bar.center, bar.value)
                    .width(bar.width)
                    .fill(color32(bar.color))
                    .name(&bar.label)
            })
            .collect();
        let marks: Vec<(f64, String)> = chart
            .bars
            .iter()
            .map(|b| (b.center, b.label.clone()))
            .collect();
        let positions: Vec<f64> = marks.iter().map(|(x, _)| *x).collect();
        let (x_min, x_max) = chart.x.extent();
        let (y_min, y_max) = y.bounds();

        Plot::new(("station_plot", self.metric.axis_label()))
            .height(height)
            .x_axis_label(X_AXIS_LABEL)
            .y_axis_label(self.metric.axis_label())
            .x_grid_spacer(category_spacer(positions))
            .x_axis_formatter(category_formatter(marks))
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max([x_min, y_min], [x_max, y_max]));
                plot_ui.bar_chart(BarChart::new(bars).name(self.metric.axis_label()));
            });

        ui.vertical_centered(|ui| {
            ui.strong(&chart.caption);
        });
    }
}
