//! Plant Store - storefront screen with a fanned product carousel

use anyhow::Context;
use eframe::egui;
use env_logger::{Builder, Target};
use log::LevelFilter;
use plant_store::config::AppConfig;
use plant_store::gui::PlantStoreApp;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("plant_store", LevelFilter::Debug)
        .init();
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = AppConfig::from_environment().context("Failed to load configuration")?;
    log::info!(
        "Starting with {} pages, window {}x{}",
        config.page_count,
        config.window_width,
        config.window_height
    );

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_resizable(false)
            .with_title("Plant Store"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Plant Store",
        options,
        Box::new(move |cc| Ok(Box::new(PlantStoreApp::new(cc, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run window: {}", e))
}
