use pd_app::{ClientError, DashboardConfig, HttpTransport, SimulationClient};
use pd_results::Aggregate;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

/// One in-flight run request on a background thread.
pub struct RunWorker {
    pub result_rx: Receiver<WorkerMessage>,
    _handle: JoinHandle<()>,
}

#[derive(Debug)]
pub enum WorkerMessage {
    Finished(Result<Aggregate, ClientError>),
}

impl RunWorker {
    pub fn start(config: &DashboardConfig) -> Self {
        let (tx, rx) = channel();
        let config = config.clone();

        let handle = thread::spawn(move || Self::run_simulation(&config, &tx));

        Self {
            result_rx: rx,
            _handle: handle,
        }
    }

    fn run_simulation(config: &DashboardConfig, tx: &Sender<WorkerMessage>) {
        tracing::info!(url = %config.run_url(), "requesting simulation run");
        let result = HttpTransport::from_config(config)
            .and_then(|transport| SimulationClient::new(transport).run());
        // The app may have shut down; nothing to report to then.
        let _ = tx.send(WorkerMessage::Finished(result));
    }
}
