//! Service layer for the plant dashboard.
//!
//! Holds everything the desktop frontend needs that is not drawing: the run
//! client, granularity selection, the replay loop and the controller that ties
//! them to the chart surfaces.

pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod query;
pub mod replay;
pub mod selector;
pub mod timer;

pub use client::{HttpTransport, SimulationClient, SimulationTransport, TransportResponse};
pub use config::{load_config, DashboardConfig};
pub use dashboard::{Dashboard, Diagnostic, DiagnosticLevel, LiveDashboard, Session, Surfaces};
pub use error::{AppError, AppResult, ClientError};
pub use query::{summarize, RunSummary, SeriesSummary};
pub use replay::{ReplayScheduler, ReplayState};
pub use selector::{GranularityChanged, GranularityOption, PeriodSelector};
pub use timer::{Clock, ClockTimer, ManualClock, MonotonicClock, Timer};
