use egui::{Color32, ProgressBar, Ui};
use egui_phosphor::regular as icons;

use crate::gui::table::{self, ColumnSpec, TableConfig};
use crate::gui::App;
use crate::models::{Beacon, BeaconField, BeaconStatus};
use crate::utils::format;

const CONFIG: TableConfig = TableConfig {
    id: "beacons_table",
    empty_message: "No beacons found",
};

impl App {
    /// Render the beacons view. The only paginated table; its state was
    /// built with a pager, so the shared renderer draws the page controls.
    pub fn render_beacons_view(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.heading("Beacons");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(format!("{} Refresh", icons::ARROW_CLOCKWISE))
                    .clicked()
                {
                    self.refresh_beacons();
                }
            });
        });
        ui.weak(format!(
            "Monitor and manage beacons for tenant {}",
            self.tenant
        ));
        ui.separator();

        let rows = self.beacons.rows();
        table::show(
            ui,
            &mut self.beacons_table,
            &rows,
            &columns(),
            &CONFIG,
            self.beacons.is_loading(),
        );
    }
}

fn columns() -> [ColumnSpec<Beacon>; 5] {
    [
        ColumnSpec {
            header: "Name",
            sort_field: Some(BeaconField::Name),
            min_width: 170.0,
            cell: |ui, beacon| {
                ui.vertical(|ui| {
                    ui.strong(&beacon.name);
                    ui.weak(egui::RichText::new(&beacon.mac_address).monospace().small());
                });
            },
        },
        ColumnSpec {
            header: "Location",
            sort_field: Some(BeaconField::Location),
            min_width: 130.0,
            cell: |ui, beacon| {
                ui.label(&beacon.location);
            },
        },
        ColumnSpec {
            header: "Status",
            sort_field: Some(BeaconField::Status),
            min_width: 100.0,
            cell: |ui, beacon| {
                ui.colored_label(status_color(beacon.status), beacon.status.label());
            },
        },
        ColumnSpec {
            header: "Battery",
            sort_field: Some(BeaconField::Battery),
            min_width: 110.0,
            cell: |ui, beacon| {
                let level = beacon.battery_level;
                ui.add(
                    ProgressBar::new(f32::from(level) / 100.0)
                        .desired_width(60.0)
                        .fill(battery_color(level)),
                );
                ui.weak(format!("{level}%"));
            },
        },
        ColumnSpec {
            header: "Last Activity",
            sort_field: Some(BeaconField::LastSeen),
            min_width: 130.0,
            cell: |ui, beacon| {
                ui.label(format::timestamp(&beacon.last_seen));
            },
        },
    ]
}

fn status_color(status: BeaconStatus) -> Color32 {
    match status {
        BeaconStatus::Online => Color32::from_rgb(34, 197, 94),
        BeaconStatus::Offline => Color32::from_rgb(239, 68, 68),
        BeaconStatus::Maintenance => Color32::from_rgb(249, 115, 22),
    }
}

fn battery_color(level: u8) -> Color32 {
    if level > 50 {
        Color32::from_rgb(34, 197, 94)
    } else if level > 20 {
        Color32::from_rgb(234, 179, 8)
    } else {
        Color32::from_rgb(239, 68, 68)
    }
}
