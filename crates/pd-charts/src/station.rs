//! Per-station bar charts for a single replay period.

use crate::palette::{CategoricalPalette, Rgb};
use crate::scale::{BandScale, LinearScale};
use crate::title::{station_title, DOWNTIME_TITLE, OCCUPANCY_TITLE};
use pd_results::{Granularity, PeriodRecord, StationRecord};

pub const X_AXIS_LABEL: &str = "Workstations";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StationMetric {
    Occupancy,
    Downtime,
}

impl StationMetric {
    pub fn value(self, station: &StationRecord) -> f64 {
        match self {
            StationMetric::Occupancy => station.occupancy,
            StationMetric::Downtime => station.downtime,
        }
    }

    pub fn title_base(self) -> &'static str {
        match self {
            StationMetric::Occupancy => OCCUPANCY_TITLE,
            StationMetric::Downtime => DOWNTIME_TITLE,
        }
    }

    pub fn axis_label(self) -> &'static str {
        match self {
            StationMetric::Occupancy => "Occupancy",
            StationMetric::Downtime => "Downtime",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StationBar {
    pub label: String,
    pub value: f64,
    pub color: Rgb,
    /// Band center in plot coordinates.
    pub center: f64,
    pub width: f64,
}

/// Fully built bar chart for one metric over one period.
///
/// The value scale starts at zero so bars compare as absolute magnitudes.
#[derive(Debug, Clone, PartialEq)]
pub struct StationChart {
    pub metric: StationMetric,
    pub granularity: Granularity,
    pub title: String,
    /// Label of the period being shown; empty when the window is empty.
    pub caption: String,
    pub bars: Vec<StationBar>,
    pub x: BandScale,
    pub y: Option<LinearScale>,
}

impl StationChart {
    /// Build from a replay window. Only the first record of `window` is drawn.
    pub fn build(
        metric: StationMetric,
        window: &[PeriodRecord],
        granularity: Granularity,
        palette: &mut CategoricalPalette,
    ) -> Self {
        let current = window.first();
        let stations: &[StationRecord] = current.map(|r| r.stations.as_slice()).unwrap_or_default();

        let x = BandScale::new(stations.iter().map(StationRecord::label).collect(), 0.1);
        let bars: Vec<StationBar> = stations
            .iter()
            .zip(x.domain())
            .enumerate()
            .filter_map(|(i, (station, label))| {
                Some(StationBar {
                    color: palette.color(label),
                    value: metric.value(station),
                    label: label.clone(),
                    center: x.center(i)?,
                    width: x.bandwidth(),
                })
            })
            .collect();
        let y = LinearScale::from_zero(bars.iter().map(|b| b.value));

        Self {
            metric,
            granularity,
            title: station_title(metric.title_base(), granularity),
            caption: current.map(|r| r.period.clone()).unwrap_or_default(),
            bars,
            x,
            y,
        }
    }
}
