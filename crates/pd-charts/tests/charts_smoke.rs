use pd_charts::*;
use pd_results::{Granularity, PeriodRecord, StationRecord};
use proptest::prelude::*;

fn record(period: &str, avg: f64, stations: &[(u64, f64, f64)]) -> PeriodRecord {
    stations.iter().fold(PeriodRecord::new(period, avg), |r, (id, occ, down)| {
        r.with_station(StationRecord::new(*id, *occ, *down))
    })
}

#[test]
fn station_colors_stable_across_ticks() {
    let mut palette = CategoricalPalette::new();
    let ticks = [
        record("Week 1", 1.0, &[(1, 3.0, 0.0), (2, 4.0, 1.0), (3, 1.0, 0.5)]),
        record("Week 2", 1.0, &[(1, 8.0, 2.0), (2, 2.0, 0.0), (3, 6.0, 0.0)]),
    ];

    let first = StationChart::build(
        StationMetric::Occupancy,
        &ticks[..1],
        Granularity::Weekly,
        &mut palette,
    );
    let second = StationChart::build(
        StationMetric::Occupancy,
        &ticks[1..],
        Granularity::Weekly,
        &mut palette,
    );

    for (a, b) in first.bars.iter().zip(&second.bars) {
        assert_eq!(a.label, b.label);
        assert_eq!(a.color, b.color);
    }
    assert_eq!(second.caption, "Week 2");
    assert_eq!(second.y.unwrap().domain(), (0.0, 8.0));
}

#[test]
fn production_point_count_matches_series() {
    let records: Vec<PeriodRecord> = (1..=12)
        .map(|m| record(&format!("Month {}", m), 300.0 + m as f64, &[]))
        .collect();
    let chart = ProductionChart::build(&records, Granularity::Monthly, DEFAULT_MAX_X_LABELS);
    assert_eq!(chart.len(), records.len());
    assert_eq!(chart.line_points().len(), records.len());
    assert_eq!(chart.tick_marks().len(), 12);
}

proptest! {
    #[test]
    fn production_line_fits_axis_bounds(values in prop::collection::vec(-1e6f64..1e6, 1..200)) {
        let records: Vec<PeriodRecord> = values
            .iter()
            .enumerate()
            .map(|(i, v)| PeriodRecord::new(format!("P{}", i), *v))
            .collect();
        let chart = ProductionChart::build(&records, Granularity::Daily, DEFAULT_MAX_X_LABELS);
        let (x_lo, x_hi) = chart.x.extent();
        let (y_lo, y_hi) = chart.y.unwrap().bounds();
        let min = values.iter().cloned().fold(f64::MAX, f64::min);
        let max = values.iter().cloned().fold(f64::MIN, f64::max);
        if max > min {
            prop_assert_eq!((y_lo, y_hi), (min, max));
        }
        for [x, y] in chart.line_points() {
            prop_assert!(x > x_lo && x < x_hi);
            prop_assert!(y >= y_lo && y <= y_hi);
        }
    }

    #[test]
    fn station_domain_starts_at_zero(values in prop::collection::vec(0f64..1e4, 1..12)) {
        let stations: Vec<(u64, f64, f64)> = values
            .iter()
            .enumerate()
            .map(|(i, v)| (i as u64 + 1, *v, *v / 2.0))
            .collect();
        let window = [record("Day 1", 0.0, &stations)];
        let mut palette = CategoricalPalette::new();
        let chart = StationChart::build(
            StationMetric::Occupancy,
            &window,
            Granularity::Daily,
            &mut palette,
        );
        let max = values.iter().cloned().fold(f64::MIN, f64::max);
        prop_assert_eq!(chart.y.unwrap().domain(), (0.0, max));
        prop_assert_eq!(chart.bars.len(), values.len());
    }
}
