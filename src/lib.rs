//! API Compliance Dashboard
//!
//! A native dashboard showing API uptime, response times and compliance
//! findings for a single operation under test.

pub mod app;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod dataset_watcher;
pub mod error;
pub mod export;
pub mod gui;
pub mod logging;

pub use app::DashboardApp;
pub use config::AppConfig;
pub use dashboard::{DashboardView, Tab};
pub use error::{DashboardError, Result};
