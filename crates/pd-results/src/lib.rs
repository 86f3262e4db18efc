//! pd-results: simulation result model and payload parsing.

pub mod granularity;
pub mod payload;
pub mod types;

pub use granularity::Granularity;
pub use payload::parse_aggregate;
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Payload is not a JSON object (found {found})")]
    NotAnObject { found: &'static str },

    #[error("Payload holds no daily, weekly, monthly, quarterly or yearly series")]
    NoSeries,

    #[error("Invalid {granularity} series: {source}")]
    InvalidSeries {
        granularity: Granularity,
        source: serde_json::Error,
    },

    #[error("Unknown granularity: {0}")]
    UnknownGranularity(String),
}
