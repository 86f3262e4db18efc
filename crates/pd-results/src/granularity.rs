//! Time aggregation levels of a simulation run.

use crate::ResultsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Granularity {
    /// All granularities, finest first.
    pub const ALL: [Granularity; 5] = [
        Granularity::Daily,
        Granularity::Weekly,
        Granularity::Monthly,
        Granularity::Quarterly,
        Granularity::Yearly,
    ];

    /// Key used in the run payload.
    pub fn key(self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
            Granularity::Quarterly => "quarterly",
            Granularity::Yearly => "yearly",
        }
    }

    /// Human label, e.g. for a dropdown.
    pub fn label(self) -> &'static str {
        match self {
            Granularity::Daily => "Daily",
            Granularity::Weekly => "Weekly",
            Granularity::Monthly => "Monthly",
            Granularity::Quarterly => "Quarterly",
            Granularity::Yearly => "Yearly",
        }
    }

    /// Unit noun for one bucket ("Day", "Week", ...).
    pub fn unit(self) -> &'static str {
        match self {
            Granularity::Daily => "Day",
            Granularity::Weekly => "Week",
            Granularity::Monthly => "Month",
            Granularity::Quarterly => "Quarter",
            Granularity::Yearly => "Year",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Granularity {
    type Err = ResultsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Granularity::ALL
            .into_iter()
            .find(|g| g.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ResultsError::UnknownGranularity(s.to_string()))
    }
}
