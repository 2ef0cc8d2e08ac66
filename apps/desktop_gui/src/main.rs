mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Result};
use clap::Parser;
use client_core::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::UiEvent, routes::Route};
use crate::ui::{PizzaOrderApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(about = "Bloom Pizza desktop ordering app")]
struct Args {
    /// Overrides the configured order endpoint.
    #[arg(long)]
    order_url: Option<String>,
    /// Initial view: "/" or "/order".
    #[arg(long, default_value = Route::HOME_PATH)]
    start_route: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    let args = Args::parse();

    let settings = load_settings()?.with_order_url(args.order_url);
    settings.validate()?;
    tracing::info!(order_url = %settings.order_url, "starting desktop gui");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings);

    let startup = StartupConfig {
        start_route: Route::from_path(&args.start_route),
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Bloom Pizza")
            .with_inner_size([520.0, 560.0])
            .with_min_inner_size([360.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Bloom Pizza",
        options,
        Box::new(move |_cc| Ok(Box::new(PizzaOrderApp::new(cmd_tx, ui_rx, startup)))),
    )
    .map_err(|err| anyhow!("desktop gui exited with error: {err}"))
}
