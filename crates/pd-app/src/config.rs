//! Dashboard configuration.

use crate::error::{AppError, AppResult};
use pd_results::Granularity;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of the simulation server, without a trailing path.
    pub server_url: String,
    pub endpoint: String,
    pub replay_interval_ms: u64,
    pub max_x_labels: usize,
    pub default_granularity: Granularity,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:5000".to_string(),
            endpoint: "/run_simulation".to_string(),
            replay_interval_ms: 1000,
            max_x_labels: pd_charts::DEFAULT_MAX_X_LABELS,
            default_granularity: Granularity::Daily,
        }
    }
}

impl DashboardConfig {
    pub fn replay_interval(&self) -> Duration {
        Duration::from_millis(self.replay_interval_ms)
    }

    /// Full URL of the run endpoint.
    pub fn run_url(&self) -> String {
        format!(
            "{}/{}",
            self.server_url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.replay_interval_ms == 0 {
            return Err(AppError::Config(
                "replay_interval_ms must be positive".to_string(),
            ));
        }
        if self.max_x_labels == 0 {
            return Err(AppError::Config("max_x_labels must be positive".to_string()));
        }
        if self.server_url.trim().is_empty() {
            return Err(AppError::Config("server_url is empty".to_string()));
        }
        Ok(())
    }

    pub fn from_yaml(text: &str) -> AppResult<Self> {
        let config: DashboardConfig = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }
}

/// Load and validate a YAML config file.
pub fn load_config(path: &Path) -> AppResult<DashboardConfig> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    DashboardConfig::from_yaml(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = DashboardConfig::from_yaml("server_url: http://sim:8080/\n").unwrap();
        assert_eq!(config.run_url(), "http://sim:8080/run_simulation");
        assert_eq!(config.replay_interval(), Duration::from_secs(1));
        assert_eq!(config.max_x_labels, 40);
        assert_eq!(config.default_granularity, Granularity::Daily);
    }

    #[test]
    fn granularity_from_yaml() {
        let config = DashboardConfig::from_yaml("default_granularity: weekly\n").unwrap();
        assert_eq!(config.default_granularity, Granularity::Weekly);
    }

    #[test]
    fn rejects_zero_interval() {
        let err = DashboardConfig::from_yaml("replay_interval_ms: 0\n").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn missing_file() {
        let err = load_config(Path::new("/nonexistent/plantdash.yaml")).unwrap_err();
        assert!(matches!(err, AppError::ConfigRead { .. }));
    }
}
