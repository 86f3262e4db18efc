//! Chart titles.

use pd_results::Granularity;

pub const PRODUCTION_TITLE: &str = "Complete Production of the Plant";
pub const OCCUPANCY_TITLE: &str = "Occupancy per Workstation";
pub const DOWNTIME_TITLE: &str = "Downtime per Workstation";

/// Suffix for the production trend title.
pub fn per_unit_suffix(granularity: Granularity) -> &'static str {
    match granularity {
        Granularity::Daily => "Per Day",
        Granularity::Weekly => "Per Week",
        Granularity::Monthly => "Per Month",
        Granularity::Quarterly => "Per Quarter",
        Granularity::Yearly => "Per Year",
    }
}

/// Suffix for the station chart titles.
pub fn cadence_suffix(granularity: Granularity) -> &'static str {
    match granularity {
        Granularity::Daily => "(Daily)",
        Granularity::Weekly => "(Weekly)",
        Granularity::Monthly => "(Monthly)",
        Granularity::Quarterly => "(Quarterly)",
        Granularity::Yearly => "(Yearly)",
    }
}

pub fn production_title(granularity: Granularity) -> String {
    format!("{} {}", PRODUCTION_TITLE, per_unit_suffix(granularity))
}

pub fn station_title(base: &str, granularity: Granularity) -> String {
    format!("{} {}", base, cadence_suffix(granularity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles() {
        assert_eq!(
            production_title(Granularity::Weekly),
            "Complete Production of the Plant Per Week"
        );
        assert_eq!(
            station_title(OCCUPANCY_TITLE, Granularity::Yearly),
            "Occupancy per Workstation (Yearly)"
        );
    }
}
