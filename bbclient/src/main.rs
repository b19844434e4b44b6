use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod fetch;
mod gui;
mod models;
mod table;
mod utils;

use utils::ApiClient;

/// BeaconBoard client: fleet dashboard GUI with an optional terminal mode
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Server base URL
    #[arg(long, default_value = "http://127.0.0.1:3001")]
    server_url: String,

    /// Tenant whose dashboard to show
    #[arg(long, default_value = "demo-tenant")]
    tenant: String,

    /// Run the line-oriented terminal client instead of the GUI
    #[arg(long)]
    cli: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let api = ApiClient::builder()
        .base_url(args.server_url.clone())
        .build()?;

    if args.cli {
        let mut client = cli::Client::new(api, args.tenant)?;
        client.run()?;
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1180.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "BeaconBoard",
        options,
        Box::new(move |cc| Ok(Box::new(gui::App::new(cc, api, args.tenant)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start GUI: {e}"))
}
