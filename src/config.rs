use chrono::NaiveDate;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::data::grid::{self, GridPolicy};
use crate::data::samples;
use crate::error::{DashboardError, Result};

pub const ENV_PREFIX: &str = "COMPLIANCE_DASHBOARD";
pub const CONFIG_PATH_ENV: &str = "COMPLIANCE_DASHBOARD_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config/dashboard.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub window: WindowConfig,
    pub grid: GridConfig,
    pub dataset: DatasetConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub min_width: f32,
    pub min_height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub start_date: NaiveDate,
    pub days: usize,
    pub time_slots: Vec<String>,
    pub up_probability: f64,
    pub seed: Option<u64>,
    pub policy: GridPolicy,
}

impl GridConfig {
    pub fn day_labels(&self) -> Vec<String> {
        grid::day_labels(self.start_date, self.days)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    pub path: Option<PathBuf>,
    pub watch: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub logs_dir: PathBuf,
}

/// Command-line values that take precedence over every config layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub dataset: Option<PathBuf>,
    /// A fixed seed also pins the grid to [`GridPolicy::Stable`].
    pub seed: Option<u64>,
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Defaults, then the config file, then `COMPLIANCE_DASHBOARD__*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => std::env::var(CONFIG_PATH_ENV)
                .map(PathBuf::from)
                .ok()
                .or_else(|| {
                    let default = PathBuf::from(DEFAULT_CONFIG_PATH);
                    default.exists().then_some(default)
                }),
        };

        let defaults = toml::to_string(&AppConfig::default())
            .map_err(|e| DashboardError::InvalidConfig(vec![e.to_string()]))?;

        let mut builder =
            Config::builder().add_source(File::from_str(&defaults, FileFormat::Toml));

        match &config_path {
            Some(p) => {
                info!("Loading configuration from: {:?}", p);
                builder = builder.add_source(File::from(p.clone()));
            }
            None => info!("No configuration file found, using defaults"),
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;

        debug!("Configuration loaded successfully");
        debug!("Environment: {}", app_config.app.environment);
        debug!("Log level: {}", app_config.app.log_level);

        Ok(app_config)
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(path) = &overrides.dataset {
            self.dataset.path = Some(path.clone());
        }
        if let Some(seed) = overrides.seed {
            self.grid.seed = Some(seed);
            self.grid.policy = GridPolicy::Stable;
        }
        if let Some(level) = &overrides.log_level {
            self.app.log_level = level.clone();
        }
    }

    pub fn validate(&self) -> std::result::Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.app.name.trim().is_empty() {
            errors.push("App name must not be empty".to_string());
        }

        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            errors.push("Window size must be greater than 0".to_string());
        }

        if self.window.min_width > self.window.width || self.window.min_height > self.window.height {
            errors.push("Minimum window size must not exceed window size".to_string());
        }

        if self.grid.days == 0 {
            errors.push("Grid must have at least one day".to_string());
        }

        if self.grid.time_slots.is_empty() {
            errors.push("Grid must have at least one time slot".to_string());
        }

        if !(0.0..=1.0).contains(&self.grid.up_probability) {
            errors.push("Up probability must be between 0 and 1".to_string());
        }

        if self.dataset.watch && self.dataset.path.is_none() {
            errors.push("Dataset watch requires a dataset path".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    pub fn default_logs_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("api-compliance-dashboard")
            .join("logs")
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "API Compliance Dashboard".to_string(),
                environment: "development".to_string(),
                log_level: "info".to_string(),
            },
            window: WindowConfig {
                title: "Monitoring Products API".to_string(),
                width: 1400.0,
                height: 900.0,
                min_width: 900.0,
                min_height: 600.0,
            },
            grid: GridConfig {
                start_date: NaiveDate::from_ymd_opt(2024, 11, 18).unwrap_or_default(),
                days: 7,
                time_slots: samples::time_slots(),
                up_probability: 0.8,
                seed: None,
                policy: GridPolicy::Reroll,
            },
            dataset: DatasetConfig {
                path: None,
                watch: false,
            },
            storage: StorageConfig {
                logs_dir: Self::default_logs_dir(),
            },
        }
    }
}
