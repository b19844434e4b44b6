use egui::Ui;

use crate::gui::App;
use crate::utils::ApiClient;

impl App {
    /// Render the settings view
    pub fn render_settings_view(&mut self, ui: &mut Ui) {
        ui.heading("Settings");
        ui.separator();

        ui.add_space(20.0);

        ui.collapsing("Server Connection", |ui| {
            ui.horizontal(|ui| {
                ui.label("Server URL:");
                ui.text_edit_singleline(&mut self.settings_url);
            });
            ui.horizontal(|ui| {
                ui.label("Tenant:");
                ui.text_edit_singleline(&mut self.settings_tenant);
            });
            if ui.button("Apply").clicked() {
                self.apply_settings();
            }
        });

        ui.collapsing("About", |ui| {
            ui.label("BeaconBoard - a beacon fleet dashboard");
            ui.label(format!("Version: {}", env!("CARGO_PKG_VERSION")));
        });
    }

    /// Swap the API client for the edited URL and reload everything. A bad
    /// URL is logged and leaves the current connection in place.
    fn apply_settings(&mut self) {
        match ApiClient::new(self.settings_url.clone()) {
            Ok(api) => {
                self.api = api;
                self.tenant = self.settings_tenant.clone();
                self.refresh_all();
            }
            Err(error) => {
                tracing::error!(%error, "rejected server settings");
            }
        }
    }
}
