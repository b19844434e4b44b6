use crate::models::{AlertSeverity, BeaconStatus, UserStatus};
use crate::utils::{format, ApiClient, Result};
use colored::*;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Terminal-based client for quick fleet queries without the GUI
pub struct Client {
    /// API client for server communication
    api: ApiClient,
    /// Tenant used when a command does not name one
    tenant: String,
    /// Command line editor for user input
    editor: DefaultEditor,
    /// Path to command history file
    history_path: PathBuf,
}

impl Client {
    /// Create a new CLI client
    pub fn new(api: ApiClient, tenant: String) -> Result<Self> {
        let mut editor = DefaultEditor::new()?;
        let history_path = dirs::home_dir()
            .unwrap_or_default()
            .join(".bbclient_history");

        // Load history if it exists
        if editor.load_history(&history_path).is_err() {
            println!("{}", "No previous history.".yellow());
        }

        Ok(Self {
            api,
            tenant,
            editor,
            history_path,
        })
    }

    /// Print available commands
    pub fn print_help(&self) {
        println!("\n{}", "Commands:".green().bold());
        println!("{} - ping server", "ping".cyan());
        println!("{} - list users", "users".cyan());
        println!("{} - list beacons", "beacons".cyan());
        println!("{} - list alerts", "alerts".cyan());
        println!("{} - tenant summary", "dashboard [tenant]".cyan());
        println!("{} - help", "help".cyan());
        println!("{} - clear", "clear".cyan());
        println!("{} - exit", "exit".cyan());
        println!();
    }

    /// Process a command entered by the user
    pub fn handle_command(&self, command: &str) -> bool {
        let parts: Vec<&str> = command.trim().split_whitespace().collect();
        match parts.first().copied() {
            Some("exit") | Some("quit") => {
                println!("{}", "Goodbye!".green());
                false
            }
            Some("help") => {
                self.print_help();
                true
            }
            Some("clear") => {
                print!("\x1B[2J\x1B[1;1H");
                true
            }
            Some("ping") => {
                self.handle_ping();
                true
            }
            Some("users") => {
                self.handle_list_users();
                true
            }
            Some("beacons") => {
                self.handle_list_beacons();
                true
            }
            Some("alerts") => {
                self.handle_list_alerts();
                true
            }
            Some("dashboard") => {
                self.handle_dashboard(parts.get(1).copied());
                true
            }
            Some(cmd) => {
                println!("{} {}", "Unknown command:".red(), cmd);
                true
            }
            None => true,
        }
    }

    /// Handle the ping command
    fn handle_ping(&self) {
        match self.api.health() {
            Ok(health) => {
                println!(
                    "{} {} (v{}, up {}s)",
                    "Server status:".green(),
                    health.status,
                    health.version,
                    health.uptime_seconds
                );
            }
            Err(e) => {
                println!("{} {}", "Error:".red(), e);
            }
        }
    }

    /// Handle the users command
    fn handle_list_users(&self) {
        match self.api.get_users() {
            Ok(users) => {
                println!("\n{}", "Users:".green().bold());
                println!(
                    "{}",
                    format!(
                        "{:<16} {:<28} {:<8} {:<10} {:<12}",
                        "NAME", "EMAIL", "ROLE", "STATUS", "LAST LOGIN"
                    )
                    .bold()
                );
                for user in users {
                    println!(
                        "{:<16} {:<28} {:<8} {} {:<12}",
                        user.name,
                        user.email,
                        user.role.label(),
                        pad_user_status(user.status),
                        format::date_or(user.last_login.as_ref(), "Never"),
                    );
                }
                println!();
            }
            Err(e) => {
                println!("{} {}", "Error:".red(), e);
            }
        }
    }

    /// Handle the beacons command
    fn handle_list_beacons(&self) {
        match self.api.get_beacons() {
            Ok(beacons) => {
                println!("\n{}", "Beacons:".green().bold());
                println!(
                    "{}",
                    format!(
                        "{:<20} {:<16} {:<12} {:>7}  {:<16}",
                        "NAME", "LOCATION", "STATUS", "BATTERY", "LAST SEEN"
                    )
                    .bold()
                );
                for beacon in beacons {
                    println!(
                        "{:<20} {:<16} {} {}  {:<16}",
                        beacon.name,
                        beacon.location,
                        pad_beacon_status(beacon.status),
                        pad_battery(beacon.battery_level),
                        format::timestamp(&beacon.last_seen),
                    );
                }
                println!();
            }
            Err(e) => {
                println!("{} {}", "Error:".red(), e);
            }
        }
    }

    /// Handle the alerts command
    fn handle_list_alerts(&self) {
        match self.api.get_alerts() {
            Ok(alerts) => {
                println!("\n{}", "Alerts:".green().bold());
                println!(
                    "{}",
                    format!(
                        "{:<28} {:<9} {:<13} {:<20} {:<16}",
                        "TITLE", "SEVERITY", "STATUS", "SOURCE", "CREATED"
                    )
                    .bold()
                );
                for alert in alerts {
                    println!(
                        "{:<28} {} {:<13} {:<20} {:<16}",
                        alert.title,
                        pad_severity(alert.severity),
                        alert.status.label(),
                        alert.source,
                        format::timestamp(&alert.timestamp),
                    );
                }
                println!();
            }
            Err(e) => {
                println!("{} {}", "Error:".red(), e);
            }
        }
    }

    /// Handle the dashboard command
    fn handle_dashboard(&self, tenant: Option<&str>) {
        let tenant = tenant.unwrap_or(&self.tenant);
        match self.api.get_dashboard(tenant) {
            Ok(dashboard) => {
                let summary = &dashboard.summary;
                println!("\n{} {}", "Tenant:".green().bold(), dashboard.tenant.name);
                println!(
                    "Users:   {} total, {} active",
                    summary.total_users, summary.active_users
                );
                println!(
                    "Beacons: {} total, {} online",
                    summary.total_beacons, summary.online_beacons
                );
                println!(
                    "Alerts:  {} total, {} active",
                    summary.total_alerts, summary.active_alerts
                );
                println!();
            }
            Err(e) => {
                println!("{} {}", "Error:".red(), e);
            }
        }
    }

    /// Run the CLI client
    pub fn run(&mut self) -> Result<()> {
        println!("\n{}", "Welcome to BeaconBoard!".green().bold());
        self.print_help();

        loop {
            let prompt = "> ".cyan().bold().to_string();
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history_entry(line.as_str())?;
                    }
                    if !self.handle_command(&line) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "CTRL-C".yellow());
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", "CTRL-D".yellow());
                    break;
                }
                Err(err) => {
                    println!("{} {:?}", "Error:".red(), err);
                    break;
                }
            }
        }

        // Save history
        if let Err(e) = self.editor.save_history(&self.history_path) {
            println!("{} {}", "Failed to save history:".red(), e);
        }

        Ok(())
    }
}

// Cells are padded before coloring so the ANSI escapes do not upset the
// column alignment.
fn pad_user_status(status: UserStatus) -> ColoredString {
    let cell = format!("{:<10}", status.label());
    match status {
        UserStatus::Active => cell.green(),
        UserStatus::Inactive => cell.red(),
        UserStatus::Pending => cell.yellow(),
    }
}

fn pad_beacon_status(status: BeaconStatus) -> ColoredString {
    let cell = format!("{:<12}", status.label());
    match status {
        BeaconStatus::Online => cell.green(),
        BeaconStatus::Offline => cell.red(),
        BeaconStatus::Maintenance => cell.yellow(),
    }
}

fn pad_severity(severity: AlertSeverity) -> ColoredString {
    let cell = format!("{:<9}", severity.label());
    match severity {
        AlertSeverity::Low => cell.blue(),
        AlertSeverity::Medium => cell.yellow(),
        AlertSeverity::High | AlertSeverity::Critical => cell.red(),
    }
}

fn pad_battery(level: u8) -> ColoredString {
    let cell = format!("{:>6}%", level);
    if level > 50 {
        cell.green()
    } else if level > 20 {
        cell.yellow()
    } else {
        cell.red()
    }
}
