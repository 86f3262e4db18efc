//! Error types for the pd-app service layer.

use pd_results::Granularity;
use std::path::PathBuf;

/// Failure of a single simulation run request.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request failed or the server answered with a non-2xx status.
    /// `status` is `None` when no response arrived.
    #[error("Simulation request failed: {message}")]
    Network { status: Option<u16>, message: String },

    #[error("Malformed simulation payload: {0}")]
    Parse(#[from] pd_results::ResultsError),
}

impl ClientError {
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        ClientError::Network {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

/// Application error type shared by the dashboard controller and its frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("No {0} data in the current run")]
    MissingPeriodData(Granularity),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(String),
}

/// Result type for pd-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
