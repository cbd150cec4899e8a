//! ShipDocs - commercial invoice and packing list editor
//!
//! Fills in one shipment's data once and prints it either as a commercial
//! invoice or as a packing list. Work in progress is saved locally after
//! every change.

mod app;
mod core;
mod ui;

use app::ShipDocsApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting ShipDocs...");

    let ui_config = crate::core::config::AppConfig::load()
        .map(|config| config.ui)
        .unwrap_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([ui_config.window_width, ui_config.window_height])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Octaship Invoice"),
        ..Default::default()
    };

    eframe::run_native(
        "ShipDocs",
        native_options,
        Box::new(|cc| Ok(Box::new(ShipDocsApp::new(cc)))),
    )
}
