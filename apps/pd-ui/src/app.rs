use crate::run_worker::{RunWorker, WorkerMessage};
use crate::views::{ProductionView, StationView, SummaryView};
use pd_app::{DashboardConfig, DiagnosticLevel, LiveDashboard};
use pd_charts::StationMetric;
use std::sync::mpsc::TryRecvError;
use std::time::Duration;

const WORKER_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct PlantDashApp {
    dashboard: LiveDashboard,
    run_worker: Option<RunWorker>,
    production_view: ProductionView,
    occupancy_view: StationView,
    downtime_view: StationView,
}

impl PlantDashApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DashboardConfig) -> Self {
        Self {
            dashboard: LiveDashboard::live(config),
            run_worker: None,
            production_view: ProductionView::default(),
            occupancy_view: StationView::new(StationMetric::Occupancy),
            downtime_view: StationView::new(StationMetric::Downtime),
        }
    }

    fn start_run(&mut self) {
        if self.run_worker.is_some() {
            return;
        }
        self.run_worker = Some(RunWorker::start(self.dashboard.config()));
    }

    fn poll_worker(&mut self) {
        let Some(worker) = &self.run_worker else {
            return;
        };
        match worker.result_rx.try_recv() {
            Ok(WorkerMessage::Finished(result)) => {
                self.run_worker = None;
                // Failures are recorded as diagnostics by the dashboard.
                let _ = self.dashboard.apply_run_result(result);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                self.run_worker = None;
                tracing::error!("run worker exited without a result");
            }
        }
    }

    fn show_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let running = self.run_worker.is_some();
            if ui
                .add_enabled(!running, egui::Button::new("Run Simulation"))
                .clicked()
            {
                self.start_run();
            }
            if running {
                ui.spinner();
                ui.label("Simulating…");
            }

            ui.separator();
            ui.label("Time aggregation:");

            let current = self.dashboard.granularity();
            let mut selected = current;
            egui::ComboBox::from_id_salt("granularity_selector")
                .selected_text(current.label())
                .show_ui(ui, |ui| {
                    for option in self.dashboard.options() {
                        let text = if option.available || self.dashboard.session().is_none() {
                            option.granularity.label().to_string()
                        } else {
                            format!("{} (no data)", option.granularity.label())
                        };
                        ui.selectable_value(&mut selected, option.granularity, text);
                    }
                });
            if selected != current {
                self.dashboard.select_granularity(selected);
            }
        });

        if let Some(diagnostic) = self.dashboard.latest_diagnostic() {
            let color = match diagnostic.level {
                DiagnosticLevel::Warning => egui::Color32::from_rgb(0xd0, 0x90, 0x20),
                DiagnosticLevel::Error => egui::Color32::RED,
            };
            ui.colored_label(
                color,
                format!("[{}] {}", diagnostic.at.format("%H:%M:%S"), diagnostic.message),
            );
        }
    }
}

impl eframe::App for PlantDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();
        self.dashboard.poll();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.show_toolbar(ui);
        });

        egui::TopBottomPanel::bottom("summary").show(ctx, |ui| {
            SummaryView::show(ui, self.dashboard.session(), self.dashboard.granularity());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let surfaces = self.dashboard.surfaces();
            let has_run = self.dashboard.session().is_some();
            let chart_height = (ui.available_height() / 2.0 - 60.0).max(160.0);

            self.production_view
                .show(ui, surfaces.production.as_ref(), has_run, chart_height);
            ui.separator();
            ui.columns(2, |columns| {
                self.occupancy_view
                    .show(&mut columns[0], surfaces.occupancy.as_ref(), chart_height);
                self.downtime_view
                    .show(&mut columns[1], surfaces.downtime.as_ref(), chart_height);
            });
        });

        if self.run_worker.is_some() {
            ctx.request_repaint_after(WORKER_POLL_INTERVAL);
        } else if let Some(wait) = self.dashboard.next_redraw_in() {
            ctx.request_repaint_after(wait);
        }
    }
}
