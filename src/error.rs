//! Error types shared by the library

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid configuration: {}", .0.join("; "))]
    InvalidConfig(Vec<String>),
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Dataset parse error: {0}")]
    DatasetParse(#[from] toml::de::Error),
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),
    #[error("Invalid color {0:?}: expected #rrggbb")]
    InvalidColor(String),
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("File watch error: {0}")]
    Watch(#[from] notify::Error),
}

impl DashboardError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
