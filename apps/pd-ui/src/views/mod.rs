pub mod production_view;
pub mod station_view;
pub mod summary_view;

pub use production_view::ProductionView;
pub use station_view::StationView;
pub use summary_view::SummaryView;

use egui_plot::{GridInput, GridMark};
use pd_charts::Rgb;
use std::ops::RangeInclusive;

pub(crate) fn color32(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// Grid spacer placing marks only at the given category positions.
pub(crate) fn category_spacer(
    positions: Vec<f64>,
) -> impl Fn(GridInput) -> Vec<GridMark> + 'static {
    move |_input| {
        positions
            .iter()
            .map(|&value| GridMark {
                value,
                step_size: 1.0,
            })
            .collect()
    }
}

/// Axis formatter printing each category label under its position.
pub(crate) fn category_formatter(
    marks: Vec<(f64, String)>,
) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String + 'static {
    move |mark, _range| {
        marks
            .iter()
            .find(|(position, _)| (mark.value - position).abs() < 1e-6)
            .map(|(_, label)| label.clone())
            .unwrap_or_default()
    }
}
