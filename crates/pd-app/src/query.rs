//! Summary helpers over a loaded run.

use pd_results::{Aggregate, Granularity, PeriodRecord};

/// Overview of one granularity's series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    pub granularity: Granularity,
    pub record_count: usize,
    pub first_period: Option<String>,
    pub last_period: Option<String>,
    /// `(min, max)` of average daily production.
    pub production_range: Option<(f64, f64)>,
    pub station_count: usize,
    /// Sum of `production.total` over records that report it.
    pub total_production: Option<u64>,
    /// Mean of `production.faulty_rate` over records that report it.
    pub mean_faulty_rate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RunSummary {
    pub series: Vec<SeriesSummary>,
}

impl RunSummary {
    pub fn get(&self, granularity: Granularity) -> Option<&SeriesSummary> {
        self.series.iter().find(|s| s.granularity == granularity)
    }
}

pub fn summarize(aggregate: &Aggregate) -> RunSummary {
    RunSummary {
        series: aggregate
            .iter()
            .map(|(granularity, records)| summarize_series(granularity, records))
            .collect(),
    }
}

pub fn summarize_series(granularity: Granularity, records: &[PeriodRecord]) -> SeriesSummary {
    let production_range = records
        .iter()
        .map(|r| r.production.avg_daily_production)
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        });

    let totals: Vec<u64> = records.iter().filter_map(|r| r.production.total).collect();
    let rates: Vec<f64> = records
        .iter()
        .filter_map(|r| r.production.faulty_rate)
        .collect();

    SeriesSummary {
        granularity,
        record_count: records.len(),
        first_period: records.first().map(|r| r.period.clone()),
        last_period: records.last().map(|r| r.period.clone()),
        production_range,
        station_count: records.first().map(|r| r.stations.len()).unwrap_or(0),
        total_production: (!totals.is_empty()).then(|| totals.iter().sum()),
        mean_faulty_rate: (!rates.is_empty()).then(|| rates.iter().sum::<f64>() / rates.len() as f64),
    }
}
