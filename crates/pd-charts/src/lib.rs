//! pd-charts: chart models for the plant dashboard.
//!
//! Contains:
//! - scale (categorical point/band scales in plot coordinates, linear value scale)
//! - axis (x label thinning)
//! - palette (stable categorical colors)
//! - title (granularity → title suffix tables)
//! - production / station (chart builders, rebuilt from scratch per call)
//!
//! Nothing here depends on a UI toolkit; the desktop app paints these models.

pub mod axis;
pub mod palette;
pub mod production;
pub mod scale;
pub mod station;
pub mod title;

pub use axis::{thin_label_indices, DEFAULT_MAX_X_LABELS};
pub use palette::{CategoricalPalette, Rgb, CATEGORY10};
pub use production::{ProductionChart, ProductionPoint};
pub use scale::{BandScale, LinearScale, PointScale};
pub use station::{StationBar, StationChart, StationMetric};
