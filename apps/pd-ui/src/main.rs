#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod run_worker;
mod views;

use app::PlantDashApp;
use clap::Parser;
use pd_app::{load_config, AppResult, DashboardConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pd-ui")]
#[command(about = "Plant production simulation dashboard", long_about = None)]
struct Cli {
    /// Path to a YAML config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Simulation server base URL (overrides the config file)
    #[arg(long)]
    server_url: Option<String>,
}

fn resolve_config(cli: &Cli) -> AppResult<DashboardConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(url) = &cli.server_url {
        config.server_url = url.clone();
        config.validate()?;
    }
    Ok(config)
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };
    tracing::info!(url = %config.run_url(), "starting dashboard");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 900.0])
            .with_title("Plant Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Plant Dashboard",
        options,
        Box::new(|cc| Ok(Box::new(PlantDashApp::new(cc, config)))),
    )
}
