//! Result data types.

use crate::Granularity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Full result of one simulation run, keyed by granularity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    series: BTreeMap<Granularity, Vec<PeriodRecord>>,
}

impl Aggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, granularity: Granularity, records: Vec<PeriodRecord>) -> Self {
        self.series.insert(granularity, records);
        self
    }

    pub fn insert(&mut self, granularity: Granularity, records: Vec<PeriodRecord>) {
        self.series.insert(granularity, records);
    }

    /// Records for a granularity, or `None` if the run did not produce it.
    pub fn series(&self, granularity: Granularity) -> Option<&[PeriodRecord]> {
        self.series.get(&granularity).map(Vec::as_slice)
    }

    pub fn contains(&self, granularity: Granularity) -> bool {
        self.series.contains_key(&granularity)
    }

    pub fn granularities(&self) -> impl Iterator<Item = Granularity> + '_ {
        self.series.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Granularity, &[PeriodRecord])> {
        self.series.iter().map(|(g, r)| (*g, r.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// One time bucket of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRecord {
    pub period: String,
    pub production: ProductionSummary,
    #[serde(default)]
    pub stations: Vec<StationRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downtime: Option<PlantTotal>,
    /// Resupply device occupancy for the whole plant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupancy: Option<PlantTotal>,
}

impl PeriodRecord {
    pub fn new(period: impl Into<String>, avg_daily_production: f64) -> Self {
        Self {
            period: period.into(),
            production: ProductionSummary {
                avg_daily_production,
                total: None,
                faulty_rate: None,
            },
            stations: Vec::new(),
            downtime: None,
            occupancy: None,
        }
    }

    pub fn with_station(mut self, station: StationRecord) -> Self {
        self.stations.push(station);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionSummary {
    pub avg_daily_production: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faulty_rate: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlantTotal {
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub id: StationId,
    pub occupancy: f64,
    pub downtime: f64,
}

impl StationRecord {
    pub fn new(id: impl Into<StationId>, occupancy: f64, downtime: f64) -> Self {
        Self {
            id: id.into(),
            occupancy,
            downtime,
        }
    }

    /// Axis label, e.g. "Station 3".
    pub fn label(&self) -> String {
        format!("Station {}", self.id)
    }
}

/// Station identifier as sent by the server: numeric today, but strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StationId {
    Number(u64),
    Name(String),
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StationId::Number(n) => write!(f, "{}", n),
            StationId::Name(s) => f.write_str(s),
        }
    }
}

impl From<u64> for StationId {
    fn from(value: u64) -> Self {
        StationId::Number(value)
    }
}

impl From<&str> for StationId {
    fn from(value: &str) -> Self {
        StationId::Name(value.to_string())
    }
}

impl From<String> for StationId {
    fn from(value: String) -> Self {
        StationId::Name(value)
    }
}
