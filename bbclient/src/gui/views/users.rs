use egui::{Color32, Ui};
use egui_phosphor::regular as icons;

use crate::gui::table::{self, ColumnSpec, TableConfig};
use crate::gui::App;
use crate::models::{User, UserField, UserRole, UserStatus};
use crate::utils::format;

const CONFIG: TableConfig = TableConfig {
    id: "users_table",
    empty_message: "No users found",
};

impl App {
    /// Render the users view
    pub fn render_users_view(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.heading("Users");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(format!("{} Refresh", icons::ARROW_CLOCKWISE))
                    .clicked()
                {
                    self.refresh_users();
                }
            });
        });
        ui.weak(format!("Manage users for tenant {}", self.tenant));
        ui.separator();

        let rows = self.users.rows();
        table::show(
            ui,
            &mut self.users_table,
            &rows,
            &columns(),
            &CONFIG,
            self.users.is_loading(),
        );
    }
}

fn columns() -> [ColumnSpec<User>; 6] {
    [
        ColumnSpec {
            header: "Name",
            sort_field: Some(UserField::Name),
            min_width: 180.0,
            cell: |ui, user| {
                ui.vertical(|ui| {
                    ui.strong(&user.name);
                    ui.weak(&user.email);
                });
            },
        },
        ColumnSpec {
            header: "Role",
            sort_field: Some(UserField::Role),
            min_width: 70.0,
            cell: |ui, user| {
                ui.colored_label(role_color(user.role), user.role.label());
            },
        },
        ColumnSpec {
            header: "Status",
            sort_field: Some(UserField::Status),
            min_width: 80.0,
            cell: |ui, user| {
                ui.colored_label(status_color(user.status), user.status.label());
            },
        },
        ColumnSpec {
            header: "Last Login",
            sort_field: Some(UserField::LastLogin),
            min_width: 100.0,
            cell: |ui, user| {
                ui.label(format::date_or(user.last_login.as_ref(), "Never"));
            },
        },
        ColumnSpec {
            header: "Firmware Version",
            sort_field: Some(UserField::Firmware),
            min_width: 120.0,
            cell: |ui, user| {
                ui.monospace(user.firmware_version.as_deref().unwrap_or("N/A"));
            },
        },
        ColumnSpec {
            header: "Created",
            sort_field: Some(UserField::CreatedAt),
            min_width: 100.0,
            cell: |ui, user| {
                ui.label(format::date(&user.created_at));
            },
        },
    ]
}

fn role_color(role: UserRole) -> Color32 {
    match role {
        UserRole::Admin => Color32::from_rgb(168, 85, 247),
        UserRole::User => Color32::from_rgb(59, 130, 246),
        UserRole::Viewer => Color32::GRAY,
    }
}

fn status_color(status: UserStatus) -> Color32 {
    match status {
        UserStatus::Active => Color32::from_rgb(34, 197, 94),
        UserStatus::Inactive => Color32::from_rgb(239, 68, 68),
        UserStatus::Pending => Color32::from_rgb(234, 179, 8),
    }
}
