use pd_app::Session;
use pd_results::Granularity;

pub struct SummaryView;

impl SummaryView {
    pub fn show(ui: &mut egui::Ui, session: Option<&Session>, granularity: Granularity) {
        let Some(session) = session else {
            ui.label("No run yet");
            return;
        };

        ui.horizontal_wrapped(|ui| {
            ui.label(format!(
                "Run {} received {}",
                short_id(&session.run_id.to_string()),
                session.received_at.format("%H:%M:%S")
            ));
            ui.separator();

            let Some(series) = session.summary.get(granularity) else {
                ui.label(format!("No {} series", granularity));
                return;
            };

            ui.label(format!(
                "{} {}(s)",
                series.record_count,
                granularity.unit().to_lowercase()
            ));
            if let (Some(first), Some(last)) = (&series.first_period, &series.last_period) {
                ui.label(format!("{} – {}", first, last));
            }
            ui.separator();
            ui.label(format!("{} stations", series.station_count));
            if let Some((lo, hi)) = series.production_range {
                ui.separator();
                ui.label(format!("Avg daily production {:.1} to {:.1}", lo, hi));
            }
            if let Some(total) = series.total_production {
                ui.separator();
                ui.label(format!("Total produced {}", total));
            }
            if let Some(rate) = series.mean_faulty_rate {
                ui.separator();
                ui.label(format!("Faulty {:.2}%", rate * 100.0));
            }
        });
    }
}

fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}
