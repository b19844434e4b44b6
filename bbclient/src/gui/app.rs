use eframe::egui;

use crate::fetch::RowStore;
use crate::models::{Alert, Beacon, User, View};
use crate::table::TableState;
use crate::utils::ApiClient;

/// Main GUI application: one row store and one table state per entity
/// type, plus navigation and the settings form.
pub struct App {
    pub api: ApiClient,
    pub tenant: String,

    pub users: RowStore<User>,
    pub beacons: RowStore<Beacon>,
    pub alerts: RowStore<Alert>,

    pub users_table: TableState<User>,
    pub beacons_table: TableState<Beacon>,
    pub alerts_table: TableState<Alert>,

    // Store epochs the table states were last reset against.
    users_epoch: u64,
    beacons_epoch: u64,
    alerts_epoch: u64,

    pub current_view: View,

    // Settings form scratch state, applied on demand.
    pub settings_url: String,
    pub settings_tenant: String,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, api: ApiClient, tenant: String) -> Self {
        // Icon font for the navigation rail and table chrome
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let settings_url = api.base_url().to_string();
        let app = Self {
            api,
            settings_tenant: tenant.clone(),
            tenant,
            users: RowStore::new(),
            beacons: RowStore::new(),
            alerts: RowStore::new(),
            users_table: TableState::new(),
            beacons_table: TableState::paginated(),
            alerts_table: TableState::new(),
            users_epoch: 0,
            beacons_epoch: 0,
            alerts_epoch: 0,
            current_view: View::Dashboard,
            settings_url,
        };

        app.refresh_all();
        app
    }

    pub fn refresh_all(&self) {
        self.refresh_users();
        self.refresh_beacons();
        self.refresh_alerts();
    }

    pub fn refresh_users(&self) {
        let api = self.api.clone();
        self.users.refresh("users", move || api.get_users());
    }

    pub fn refresh_beacons(&self) {
        let api = self.api.clone();
        self.beacons.refresh("beacons", move || api.get_beacons());
    }

    pub fn refresh_alerts(&self) {
        let api = self.api.clone();
        self.alerts.refresh("alerts", move || api.get_alerts());
    }

    /// Drop per-view table state whenever its store holds a fresh
    /// snapshot: new data starts unsorted, unselected, on page one.
    fn sync_table_epochs(&mut self) {
        let epoch = self.users.epoch();
        if epoch != self.users_epoch {
            self.users_epoch = epoch;
            self.users_table.reset();
        }
        let epoch = self.beacons.epoch();
        if epoch != self.beacons_epoch {
            self.beacons_epoch = epoch;
            self.beacons_table.reset();
        }
        let epoch = self.alerts.epoch();
        if epoch != self.alerts_epoch {
            self.alerts_epoch = epoch;
            self.alerts_table.reset();
        }
    }

    /// Render a navigation button
    fn render_nav_button(&mut self, ui: &mut egui::Ui, icon: &str, view: View, tooltip: &str) {
        let is_selected = self.current_view == view;

        let btn = egui::Button::new(egui::RichText::new(icon).size(24.0).color(
            if is_selected {
                ui.visuals().selection.stroke.color
            } else {
                ui.visuals().text_color()
            },
        ))
        .min_size(egui::vec2(40.0, 40.0));

        let response = ui.add(btn);

        if response.clicked() {
            self.current_view = view;
        }

        response.on_hover_text(tooltip);
    }

    fn any_store_loading(&self) -> bool {
        self.users.is_loading() || self.beacons.is_loading() || self.alerts.is_loading()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_table_epochs();

        egui::SidePanel::left("nav_panel")
            .max_width(50.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    self.render_nav_button(
                        ui,
                        egui_phosphor::regular::GAUGE,
                        View::Dashboard,
                        "Dashboard",
                    );
                    self.render_nav_button(ui, egui_phosphor::regular::USERS, View::Users, "Users");
                    self.render_nav_button(
                        ui,
                        egui_phosphor::regular::BROADCAST,
                        View::Beacons,
                        "Beacons",
                    );
                    self.render_nav_button(ui, egui_phosphor::regular::BELL, View::Alerts, "Alerts");
                    ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                        self.render_nav_button(
                            ui,
                            egui_phosphor::regular::GEAR,
                            View::Settings,
                            "Settings",
                        );
                    });
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| match self.current_view {
            View::Dashboard => self.render_dashboard_view(ui),
            View::Users => self.render_users_view(ui),
            View::Beacons => self.render_beacons_view(ui),
            View::Alerts => self.render_alerts_view(ui),
            View::Settings => self.render_settings_view(ui),
        });

        // Fetches complete on worker threads; keep repainting until they
        // land so results show without waiting for input.
        if self.any_store_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
