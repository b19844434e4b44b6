use egui::{Color32, Ui};
use egui_phosphor::regular as icons;

use crate::gui::table::{self, ColumnSpec, TableConfig};
use crate::gui::App;
use crate::models::{Alert, AlertField, AlertSeverity, AlertStatus};
use crate::utils::format;

const CONFIG: TableConfig = TableConfig {
    id: "alerts_table",
    empty_message: "No alerts found",
};

impl App {
    /// Render the alerts view
    pub fn render_alerts_view(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.heading("Alerts");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(format!("{} Refresh", icons::ARROW_CLOCKWISE))
                    .clicked()
                {
                    self.refresh_alerts();
                }
            });
        });
        ui.weak(format!("Monitor system alerts for tenant {}", self.tenant));
        ui.separator();

        let rows = self.alerts.rows();
        table::show(
            ui,
            &mut self.alerts_table,
            &rows,
            &columns(),
            &CONFIG,
            self.alerts.is_loading(),
        );
    }
}

fn columns() -> [ColumnSpec<Alert>; 6] {
    [
        ColumnSpec {
            header: "Alert",
            sort_field: Some(AlertField::Title),
            min_width: 220.0,
            cell: |ui, alert| {
                ui.vertical(|ui| {
                    ui.strong(&alert.title);
                    ui.weak(&alert.message);
                });
            },
        },
        ColumnSpec {
            header: "Severity",
            sort_field: Some(AlertField::Severity),
            min_width: 80.0,
            cell: |ui, alert| {
                ui.colored_label(severity_color(alert.severity), alert.severity.label());
            },
        },
        ColumnSpec {
            header: "Status",
            sort_field: Some(AlertField::Status),
            min_width: 100.0,
            cell: |ui, alert| {
                ui.colored_label(status_color(alert.status), alert.status.label());
            },
        },
        ColumnSpec {
            header: "Source",
            sort_field: Some(AlertField::Source),
            min_width: 120.0,
            cell: |ui, alert| {
                ui.monospace(&alert.source);
            },
        },
        ColumnSpec {
            header: "Created",
            sort_field: Some(AlertField::Timestamp),
            min_width: 130.0,
            cell: |ui, alert| {
                ui.label(format::timestamp(&alert.timestamp));
            },
        },
        ColumnSpec {
            header: "Resolved",
            sort_field: Some(AlertField::ResolvedAt),
            min_width: 130.0,
            cell: |ui, alert| {
                ui.label(format::timestamp_or(alert.resolved_at.as_ref(), "-"));
            },
        },
    ]
}

/// Severity dot and label color, shared with the dashboard's alert feed.
pub(crate) fn severity_color(severity: AlertSeverity) -> Color32 {
    match severity {
        AlertSeverity::Low => Color32::from_rgb(59, 130, 246),
        AlertSeverity::Medium => Color32::from_rgb(234, 179, 8),
        AlertSeverity::High => Color32::from_rgb(249, 115, 22),
        AlertSeverity::Critical => Color32::from_rgb(239, 68, 68),
    }
}

fn status_color(status: AlertStatus) -> Color32 {
    match status {
        AlertStatus::Active => Color32::from_rgb(239, 68, 68),
        AlertStatus::Acknowledged => Color32::from_rgb(234, 179, 8),
        AlertStatus::Resolved => Color32::from_rgb(34, 197, 94),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_headers_match_the_alerts_page() {
        let headers: Vec<&str> = columns().iter().map(|c| c.header).collect();
        assert_eq!(
            headers,
            ["Alert", "Severity", "Status", "Source", "Created", "Resolved"]
        );
        assert_eq!(CONFIG.empty_message, "No alerts found");
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            severity_color(AlertSeverity::Low),
            severity_color(AlertSeverity::Medium),
            severity_color(AlertSeverity::High),
            severity_color(AlertSeverity::Critical),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
