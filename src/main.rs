//! API Compliance Dashboard
//!
//! Shows uptime, response times and compliance findings for one API
//! operation in a native window, or exports the same frame as JSON.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{error, info};

use api_compliance_dashboard::config::{AppConfig, ConfigOverrides};
use api_compliance_dashboard::data::{Dataset, GridGenerator};
use api_compliance_dashboard::gui::theme;
use api_compliance_dashboard::{dataset_watcher, export, logging, DashboardApp, DashboardView};

#[derive(Parser, Debug)]
#[command(name = "api-compliance-dashboard")]
#[command(about = "API compliance and uptime dashboard", version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "COMPLIANCE_DASHBOARD_CONFIG")]
    config: Option<PathBuf>,
    /// Dataset file replacing the built-in sample data
    #[arg(short, long)]
    dataset: Option<PathBuf>,
    /// Fixed seed for the uptime grid; keeps the grid stable
    #[arg(long)]
    seed: Option<u64>,
    /// Write a JSON snapshot of the dashboard and exit
    #[arg(long)]
    export: Option<PathBuf>,
    /// Log filter for this crate, e.g. `debug`
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.apply_overrides(&ConfigOverrides {
        dataset: cli.dataset.clone(),
        seed: cli.seed,
        log_level: cli.log_level.clone(),
    });

    if let Err(errors) = config.validate() {
        for e in &errors {
            eprintln!("  - {}", e);
        }
        anyhow::bail!("Configuration validation failed");
    }

    let _log_guard = logging::init(&config)
        .context("Failed to initialize logging")?;
    info!("🚀 Starting {} v{}", config.app.name, env!("CARGO_PKG_VERSION"));
    info!("✅ Configuration loaded ({} environment)", config.app.environment);

    let dataset = match &config.dataset.path {
        Some(path) => Dataset::load(path)
            .with_context(|| format!("Failed to load dataset from {:?}", path))?,
        None => Dataset::default(),
    };
    info!("✅ Dataset ready: {} compliance items", dataset.compliance_items.len());

    let grid = &config.grid;
    let generator = GridGenerator::new(
        grid.day_labels(),
        grid.time_slots.clone(),
        grid.up_probability,
        grid.policy,
        grid.seed,
    );
    let view = DashboardView::new(dataset, generator);

    if let Some(path) = &cli.export {
        export::write_snapshot(path, &view.render())
            .with_context(|| format!("Failed to export snapshot to {:?}", path))?;
        return Ok(());
    }

    run_gui(config, view)
}

fn run_gui(config: AppConfig, view: DashboardView) -> Result<()> {
    let window = &config.window;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([window.width, window.height])
            .with_min_inner_size([window.min_width, window.min_height])
            .with_title(window.title.clone())
            .with_icon(load_icon()),
        centered: true,
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };

    let watch_path = config
        .dataset
        .path
        .clone()
        .filter(|_| config.dataset.watch);
    let runtime = tokio::runtime::Handle::current();
    let left_pane_width = window.width * 0.4;

    info!("🖥️ Starting GUI application...");

    eframe::run_native(
        &config.app.name,
        options,
        Box::new(move |cc| {
            theme::apply(&cc.egui_ctx);

            let dataset_rx = watch_path.map(|path| {
                let (tx, rx) = mpsc::channel(4);
                let ctx = cc.egui_ctx.clone();
                runtime.spawn_blocking(move || {
                    if let Err(e) =
                        dataset_watcher::watch_dataset(path, tx, move || ctx.request_repaint())
                    {
                        error!("Dataset watcher failed: {}", e);
                    }
                });
                rx
            });

            let app = DashboardApp::new(view, dataset_rx).with_left_pane_width(left_pane_width);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))
}

fn load_icon() -> egui::IconData {
    match std::fs::read(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icon.png")) {
        Ok(icon_bytes) => match image::load_from_memory(&icon_bytes) {
            Ok(image) => {
                let rgba_image = image.to_rgba8();
                let (width, height) = rgba_image.dimensions();
                egui::IconData {
                    rgba: rgba_image.into_raw(),
                    width,
                    height,
                }
            }
            Err(_) => create_fallback_icon(),
        },
        Err(_) => create_fallback_icon(),
    }
}

/// 32x32 miniature of the uptime grid: green cells with a few red ones.
fn create_fallback_icon() -> egui::IconData {
    let size = 32;
    let cell = 8;
    let mut rgba = Vec::with_capacity(size * size * 4);
    for y in 0..size {
        for x in 0..size {
            let on_gap = x % cell == 0 || y % cell == 0;
            let (cx, cy) = (x / cell, y / cell);
            if on_gap {
                rgba.extend_from_slice(&[0, 0, 0, 0]);
            } else if (cx + 2 * cy) % 5 == 0 {
                rgba.extend_from_slice(&[239, 68, 68, 255]);
            } else {
                rgba.extend_from_slice(&[34, 197, 94, 255]);
            }
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}
