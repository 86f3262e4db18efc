//! Dashboard controller: owns the session state, the chart surfaces and the replay loop.

use crate::config::DashboardConfig;
use crate::error::{AppError, AppResult, ClientError};
use crate::query::{summarize, RunSummary};
use crate::replay::ReplayScheduler;
use crate::selector::{GranularityChanged, GranularityOption, PeriodSelector};
use crate::timer::{ClockTimer, MonotonicClock, Timer};
use chrono::{DateTime, Local};
use pd_charts::{CategoricalPalette, ProductionChart, StationChart, StationMetric};
use pd_results::{Aggregate, Granularity, PeriodRecord};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

const MAX_DIAGNOSTICS: usize = 50;

/// Dashboard running on the wall clock.
pub type LiveDashboard = Dashboard<ClockTimer<MonotonicClock>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticLevel {
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub message: String,
    pub at: DateTime<Local>,
}

/// What each drawing surface currently shows. `None` is a blank surface.
#[derive(Debug, Clone, Default)]
pub struct Surfaces {
    pub production: Option<ProductionChart>,
    pub occupancy: Option<StationChart>,
    pub downtime: Option<StationChart>,
}

impl Surfaces {
    pub fn clear(&mut self) {
        *self = Surfaces::default();
    }

    pub fn is_blank(&self) -> bool {
        self.production.is_none() && self.occupancy.is_none() && self.downtime.is_none()
    }
}

/// The result of one successful run.
#[derive(Debug, Clone)]
pub struct Session {
    pub run_id: Uuid,
    pub aggregate: Arc<Aggregate>,
    pub summary: RunSummary,
    pub received_at: DateTime<Local>,
}

pub struct Dashboard<T: Timer> {
    config: DashboardConfig,
    selector: PeriodSelector,
    session: Option<Session>,
    surfaces: Surfaces,
    replay: ReplayScheduler<T>,
    palette: CategoricalPalette,
    diagnostics: VecDeque<Diagnostic>,
}

impl LiveDashboard {
    pub fn live(config: DashboardConfig) -> Self {
        Dashboard::new(config, ClockTimer::new(MonotonicClock::new()))
    }
}

impl<T: Timer> Dashboard<T> {
    pub fn new(config: DashboardConfig, timer: T) -> Self {
        let replay = ReplayScheduler::new(timer, config.replay_interval());
        Self {
            selector: PeriodSelector::new(config.default_granularity),
            config,
            session: None,
            surfaces: Surfaces::default(),
            replay,
            palette: CategoricalPalette::new(),
            diagnostics: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn granularity(&self) -> Granularity {
        self.selector.current()
    }

    pub fn options(&self) -> Vec<GranularityOption> {
        PeriodSelector::options(self.aggregate())
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn aggregate(&self) -> Option<&Aggregate> {
        self.session.as_ref().map(|s| s.aggregate.as_ref())
    }

    pub fn surfaces(&self) -> &Surfaces {
        &self.surfaces
    }

    pub fn replay(&self) -> &ReplayScheduler<T> {
        &self.replay
    }

    pub fn latest_diagnostic(&self) -> Option<&Diagnostic> {
        self.diagnostics.back()
    }

    /// Apply the outcome of a run request.
    ///
    /// On failure nothing visible changes: the previous run, its charts and
    /// its replay stay as they were.
    pub fn apply_run_result(&mut self, result: Result<Aggregate, ClientError>) -> AppResult<()> {
        match result {
            Ok(aggregate) => {
                self.install(aggregate);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "simulation run failed");
                self.push_diagnostic(DiagnosticLevel::Error, err.to_string());
                Err(AppError::Client(err))
            }
        }
    }

    /// Replace the current run and redraw for the selected granularity.
    pub fn install(&mut self, aggregate: Aggregate) {
        let session = Session {
            run_id: Uuid::new_v4(),
            summary: summarize(&aggregate),
            aggregate: Arc::new(aggregate),
            received_at: Local::now(),
        };
        tracing::info!(
            run_id = %session.run_id,
            granularities = session.summary.series.len(),
            "simulation run received"
        );
        self.session = Some(session);
        self.palette.reset();
        if let Err(err) = self.redraw_selected() {
            tracing::debug!(error = %err, "initial render skipped");
        }
    }

    /// Change granularity. Redraws and restarts the replay if the value changed.
    pub fn select_granularity(&mut self, granularity: Granularity) -> Option<GranularityChanged> {
        let changed = self.selector.select(granularity)?;
        tracing::info!(granularity = %changed.current, "granularity changed");
        if self.session.is_some()
            && let Err(err) = self.redraw_selected()
        {
            tracing::debug!(error = %err, "redraw after selection skipped");
        }
        Some(changed)
    }

    /// Drive the replay. Returns true when the station charts were redrawn.
    pub fn poll(&mut self) -> bool {
        match self.replay.poll() {
            Some(index) => self.render_station_window(index),
            None => false,
        }
    }

    /// Time until the replay next needs a redraw.
    pub fn next_redraw_in(&self) -> Option<Duration> {
        self.replay.time_until_next_tick()
    }

    fn redraw_selected(&mut self) -> AppResult<()> {
        let granularity = self.selector.current();
        let Some(records) = self.current_series() else {
            self.surfaces.clear();
            self.replay.cancel();
            let err = AppError::MissingPeriodData(granularity);
            tracing::warn!(granularity = %granularity, "no data for selected granularity");
            self.push_diagnostic(DiagnosticLevel::Warning, err.to_string());
            return Err(err);
        };

        let production = ProductionChart::build(&records, granularity, self.config.max_x_labels);
        self.surfaces.production = Some(production);
        self.surfaces.occupancy = None;
        self.surfaces.downtime = None;
        self.replay.restart(records.len());
        Ok(())
    }

    fn render_station_window(&mut self, index: usize) -> bool {
        let granularity = self.selector.current();
        let Some(records) = self.current_series() else {
            return false;
        };
        let Some(window) = records.get(index..index + 1) else {
            return false;
        };
        tracing::debug!(index, period = %window[0].period, "replay tick");
        self.surfaces.occupancy = Some(StationChart::build(
            StationMetric::Occupancy,
            window,
            granularity,
            &mut self.palette,
        ));
        self.surfaces.downtime = Some(StationChart::build(
            StationMetric::Downtime,
            window,
            granularity,
            &mut self.palette,
        ));
        true
    }

    /// Shared snapshot of the selected series.
    fn current_series(&self) -> Option<SeriesSnapshot> {
        let session = self.session.as_ref()?;
        let granularity = self.selector.current();
        session.aggregate.contains(granularity).then(|| SeriesSnapshot {
            aggregate: Arc::clone(&session.aggregate),
            granularity,
        })
    }

    fn push_diagnostic(&mut self, level: DiagnosticLevel, message: String) {
        if self.diagnostics.len() == MAX_DIAGNOSTICS {
            self.diagnostics.pop_front();
        }
        self.diagnostics.push_back(Diagnostic {
            level,
            message,
            at: Local::now(),
        });
    }
}

/// Keeps the aggregate alive while its records are being drawn.
struct SeriesSnapshot {
    aggregate: Arc<Aggregate>,
    granularity: Granularity,
}

impl std::ops::Deref for SeriesSnapshot {
    type Target = [PeriodRecord];

    fn deref(&self) -> &[PeriodRecord] {
        self.aggregate.series(self.granularity).unwrap_or(&[])
    }
}
