//! Documentation Hub - MongoDB-backed document browser
//!
//! Fetches a collection of markdown/code documents once at startup and
//! renders them as searchable cards with a detail view.

mod app;
mod core;
mod ui;

use anyhow::Context;
use app::DochubApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::config::ConnectionConfig;
use crate::core::store;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting Documentation Hub...");

    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build the Tokio runtime")?;

    // One-shot blocking fetch before the UI becomes interactive
    let outcome = match ConnectionConfig::from_env() {
        Ok(config) => runtime.block_on(store::fetch_all(&config)),
        Err(err) => Err(err.into()),
    };

    if let Err(ref err) = outcome {
        tracing::error!("Startup fetch failed: {}", err);
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Documentation Hub"),
        ..Default::default()
    };

    eframe::run_native(
        "Documentation Hub",
        native_options,
        Box::new(|cc| Ok(Box::new(DochubApp::new(cc, outcome)))),
    )
    .map_err(|err| anyhow::anyhow!("eframe error: {err}"))
}
