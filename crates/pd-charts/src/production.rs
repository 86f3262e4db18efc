//! Production trend: one line across every period of a granularity.

use crate::axis::thin_label_indices;
use crate::scale::{LinearScale, PointScale};
use crate::title::production_title;
use pd_results::{Granularity, PeriodRecord};

pub const X_AXIS_LABEL: &str = "Time Period";
pub const Y_AXIS_LABEL: &str = "Average Daily Production";

#[derive(Debug, Clone, PartialEq)]
pub struct ProductionPoint {
    pub period: String,
    pub avg_daily_production: f64,
}

/// Fully built production chart.
///
/// The value scale spans `[min, max]` of the series rather than starting at
/// zero, so the chart shows relative variation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionChart {
    pub granularity: Granularity,
    pub title: String,
    pub points: Vec<ProductionPoint>,
    pub x: PointScale,
    /// `None` when the series has no finite values.
    pub y: Option<LinearScale>,
    /// Indices into `points` whose labels are drawn on the x axis.
    pub x_ticks: Vec<usize>,
}

impl ProductionChart {
    pub fn build(records: &[PeriodRecord], granularity: Granularity, max_x_labels: usize) -> Self {
        let points: Vec<ProductionPoint> = records
            .iter()
            .map(|r| ProductionPoint {
                period: r.period.clone(),
                avg_daily_production: r.production.avg_daily_production,
            })
            .collect();

        let x = PointScale::new(points.iter().map(|p| p.period.clone()).collect(), 0.5);
        let y = LinearScale::from_extent(points.iter().map(|p| p.avg_daily_production));
        let x_ticks = thin_label_indices(points.len(), max_x_labels);

        Self {
            granularity,
            title: production_title(granularity),
            points,
            x,
            y,
            x_ticks,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Line vertices as `[x, value]` in plot coordinates, in series order.
    /// Empty when the series has no finite values.
    pub fn line_points(&self) -> Vec<[f64; 2]> {
        if self.y.is_none() {
            return Vec::new();
        }
        self.points
            .iter()
            .enumerate()
            .filter_map(|(i, p)| Some([self.x.position(i)?, p.avg_daily_production]))
            .collect()
    }

    /// Thinned x axis marks as `(position, label)`.
    pub fn tick_marks(&self) -> Vec<(f64, String)> {
        self.x_ticks
            .iter()
            .filter_map(|&i| Some((self.x.position(i)?, self.points.get(i)?.period.clone())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[(&str, f64)]) -> Vec<PeriodRecord> {
        values
            .iter()
            .map(|(label, v)| PeriodRecord::new(*label, *v))
            .collect()
    }

    #[test]
    fn domain_is_min_max_not_zero() {
        let chart = ProductionChart::build(
            &series(&[("Jan", 10.0), ("Feb", 30.0), ("Mar", 20.0)]),
            Granularity::Monthly,
            40,
        );
        assert_eq!(chart.y.unwrap().domain(), (10.0, 30.0));
        assert_eq!(chart.len(), 3);
        assert_eq!(chart.title, "Complete Production of the Plant Per Month");
    }

    #[test]
    fn line_follows_series_order() {
        let chart = ProductionChart::build(
            &series(&[("Jan", 10.0), ("Feb", 30.0), ("Mar", 20.0)]),
            Granularity::Monthly,
            40,
        );
        let line = chart.line_points();
        assert_eq!(line, vec![[0.5, 10.0], [1.5, 30.0], [2.5, 20.0]]);
        // Axis bounds are exactly the data range.
        assert_eq!(chart.y.unwrap().bounds(), (10.0, 30.0));
        assert_eq!(
            chart.tick_marks(),
            vec![
                (0.5, "Jan".to_string()),
                (1.5, "Feb".to_string()),
                (2.5, "Mar".to_string()),
            ]
        );
    }

    #[test]
    fn empty_series_draws_nothing() {
        let chart = ProductionChart::build(&[], Granularity::Daily, 40);
        assert!(chart.is_empty());
        assert!(chart.y.is_none());
        assert!(chart.line_points().is_empty());
        assert!(chart.tick_marks().is_empty());
    }

    #[test]
    fn long_series_thins_labels() {
        let records: Vec<PeriodRecord> = (1..=365)
            .map(|d| PeriodRecord::new(format!("Day {}", d), d as f64))
            .collect();
        let chart = ProductionChart::build(&records, Granularity::Daily, 40);
        assert_eq!(chart.len(), 365);
        assert!(chart.x_ticks.len() <= 40);
        assert_eq!(chart.tick_marks()[0], (0.5, "Day 1".to_string()));
    }
}
