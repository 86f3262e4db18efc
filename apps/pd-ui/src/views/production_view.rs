use super::{category_formatter, category_spacer};
use egui_plot::{Line, Plot, PlotBounds, PlotPoints, Points};
use pd_charts::ProductionChart;
use pd_charts::production::{X_AXIS_LABEL, Y_AXIS_LABEL};

const LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x46, 0x82, 0xb4);

#[derive(Default)]
pub struct ProductionView {
    show_markers: bool,
}

impl ProductionView {
    /// `has_run` tells an empty dashboard apart from a run that lacks the
    /// selected granularity.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        chart: Option<&ProductionChart>,
        has_run: bool,
        height: f32,
    ) {
        let Some(chart) = chart else {
            ui.heading("Production");
            let text = placeholder(has_run);
            if has_run {
                ui.colored_label(ui.visuals().warn_fg_color, text);
            } else {
                ui.label(text);
            }
            return;
        };

        ui.horizontal(|ui| {
            ui.heading(&chart.title);
            ui.checkbox(&mut self.show_markers, "Markers");
        });

        let Some(y) = chart.y else {
            ui.label("No periods in this granularity");
            return;
        };

        let points = chart.line_points();
        let marks = chart.tick_marks();
        let positions: Vec<f64> = marks.iter().map(|(x, _)| *x).collect();
        let (x_min, x_max) = chart.x.extent();
        let (y_min, y_max) = y.bounds();
        let show_markers = self.show_markers;

        Plot::new("production_plot")
            .height(height)
            .x_axis_label(X_AXIS_LABEL)
            .y_axis_label(Y_AXIS_LABEL)
            .x_grid_spacer(category_spacer(positions))
            .x_axis_formatter(category_formatter(marks))
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(PlotBounds::from_min_max([x_min, y_min], [x_max, y_max]));
                if show_markers {
                    plot_ui.points(
                        Points::new(PlotPoints::from(points.clone()))
                            .radius(2.5)
                            .color(LINE_COLOR),
                    );
                }
                plot_ui.line(
                    Line::new(PlotPoints::from(points))
                        .color(LINE_COLOR)
                        .width(2.0)
                        .name(Y_AXIS_LABEL),
                );
            });
    }
}

fn placeholder(has_run: bool) -> &'static str {
    if has_run {
        "No data for the selected granularity"
    } else {
        "Run a simulation to see the production trend"
    }
}
