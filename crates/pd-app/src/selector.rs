//! Granularity selection.

use pd_results::{Aggregate, Granularity};

/// Emitted when the selected granularity changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GranularityChanged {
    pub previous: Granularity,
    pub current: Granularity,
}

/// One dropdown entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GranularityOption {
    pub granularity: Granularity,
    pub available: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodSelector {
    current: Granularity,
}

impl PeriodSelector {
    pub fn new(initial: Granularity) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Granularity {
        self.current
    }

    /// Select `granularity`; returns a notification only if the value changed.
    pub fn select(&mut self, granularity: Granularity) -> Option<GranularityChanged> {
        if granularity == self.current {
            return None;
        }
        let previous = std::mem::replace(&mut self.current, granularity);
        Some(GranularityChanged {
            previous,
            current: granularity,
        })
    }

    /// Every granularity, flagged by whether the aggregate carries it.
    pub fn options(aggregate: Option<&Aggregate>) -> Vec<GranularityOption> {
        Granularity::ALL
            .into_iter()
            .map(|granularity| GranularityOption {
                granularity,
                available: aggregate.is_some_and(|a| a.contains(granularity)),
            })
            .collect()
    }
}
