//! JSON snapshot of a rendered dashboard

use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::dashboard::screen::Screen;
use crate::error::{DashboardError, Result};

#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub version: &'static str,
    pub screen: &'a Screen,
}

pub fn write_snapshot(path: &Path, screen: &Screen) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| DashboardError::io(parent, e))?;
    }

    let snapshot = Snapshot {
        generated_at: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
        screen,
    };
    let json = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, json).map_err(|e| DashboardError::io(path, e))?;

    info!("Snapshot written to {:?}", path);
    Ok(())
}
