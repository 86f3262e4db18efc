//! Simulation run requests.

use crate::config::DashboardConfig;
use crate::error::ClientError;
use pd_results::{parse_aggregate, Aggregate};

/// Raw response of the run endpoint.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Issues the run request. One call per `post_run`, no retries.
pub trait SimulationTransport: Send + Sync {
    fn post_run(&self) -> Result<TransportResponse, ClientError>;
}

/// Blocking HTTP transport. No timeout is set: a run takes as long as the server needs.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<std::time::Duration>)
            .build()
            .map_err(ClientError::transport)?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &DashboardConfig) -> Result<Self, ClientError> {
        Self::new(config.run_url())
    }
}

impl SimulationTransport for HttpTransport {
    fn post_run(&self) -> Result<TransportResponse, ClientError> {
        let response = self
            .client
            .post(&self.url)
            .send()
            .map_err(ClientError::transport)?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(ClientError::transport)?;
        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}

const EXCERPT_LEN: usize = 200;

pub struct SimulationClient<T: SimulationTransport> {
    transport: T,
}

impl<T: SimulationTransport> SimulationClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Trigger a run and decode its result.
    pub fn run(&self) -> Result<Aggregate, ClientError> {
        let response = self.transport.post_run()?;
        if !(200..300).contains(&response.status) {
            let text = String::from_utf8_lossy(&response.body);
            let excerpt: String = text.chars().take(EXCERPT_LEN).collect();
            return Err(ClientError::Network {
                status: Some(response.status),
                message: format!("HTTP {}: {}", response.status, excerpt),
            });
        }
        Ok(parse_aggregate(&response.body)?)
    }
}
