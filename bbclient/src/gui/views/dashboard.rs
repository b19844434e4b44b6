use egui::{RichText, Ui};

use super::alerts::severity_color;
use crate::gui::App;
use crate::models::{AlertSeverity, AlertStatus, BeaconStatus, UserStatus};
use crate::utils::format;

impl App {
    /// Render the dashboard view: fleet metrics and the active-alert feed,
    /// derived from the same row stores the table views render.
    pub fn render_dashboard_view(&mut self, ui: &mut Ui) {
        ui.heading("Dashboard Overview");
        ui.weak(format!(
            "Welcome to the dashboard for tenant {}",
            self.tenant
        ));
        ui.separator();

        let users = self.users.rows();
        let beacons = self.beacons.rows();
        let alerts = self.alerts.rows();

        let loading =
            self.users.is_loading() || self.beacons.is_loading() || self.alerts.is_loading();
        if loading && users.is_empty() && beacons.is_empty() && alerts.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.spinner();
                ui.add_space(8.0);
                ui.label("Loading...");
            });
            return;
        }

        let active_users = users
            .iter()
            .filter(|u| u.status == UserStatus::Active)
            .count();
        let online_beacons = beacons
            .iter()
            .filter(|b| b.status == BeaconStatus::Online)
            .count();
        let active_alerts: Vec<_> = alerts
            .iter()
            .filter(|a| a.status == AlertStatus::Active)
            .collect();
        let critical_alerts = active_alerts
            .iter()
            .filter(|a| a.severity == AlertSeverity::Critical)
            .count();
        let avg_battery = if beacons.is_empty() {
            0
        } else {
            beacons
                .iter()
                .map(|b| usize::from(b.battery_level))
                .sum::<usize>()
                / beacons.len()
        };

        egui::ScrollArea::vertical()
            .id_salt("dashboard_scroll")
            .show(ui, |ui| {
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    metric_card(
                        ui,
                        "Users",
                        users.len().to_string(),
                        &format!("{active_users} active"),
                    );
                    metric_card(
                        ui,
                        "Beacons Online",
                        format!("{online_beacons}/{}", beacons.len()),
                        &format!("avg battery {avg_battery}%"),
                    );
                    metric_card(
                        ui,
                        "Active Alerts",
                        active_alerts.len().to_string(),
                        &format!("{critical_alerts} critical"),
                    );
                });

                ui.add_space(16.0);
                ui.strong("Recent Alerts");
                ui.weak("Latest system alerts requiring attention");
                ui.add_space(4.0);

                if active_alerts.is_empty() {
                    ui.weak("No active alerts");
                } else {
                    for alert in active_alerts.iter().take(5) {
                        egui::Frame::group(ui.style()).show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.colored_label(severity_color(alert.severity), "●");
                                ui.vertical(|ui| {
                                    ui.strong(&alert.title);
                                    ui.weak(&alert.message);
                                    ui.small(format::timestamp(&alert.timestamp));
                                });
                            });
                        });
                    }
                }
            });
    }
}

fn metric_card(ui: &mut Ui, title: &str, value: String, detail: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(150.0);
        ui.vertical(|ui| {
            ui.weak(title);
            ui.label(RichText::new(value).heading());
            ui.small(detail);
        });
    });
}
