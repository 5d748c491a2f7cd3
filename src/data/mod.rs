//! Dashboard data: sample sets, grid generation and derived chart data

pub mod dataset;
pub mod findings;
pub mod grid;
pub mod samples;
pub mod types;

pub use dataset::Dataset;
pub use findings::Finding;
pub use grid::{GridGenerator, GridPolicy, StatusGrid};
pub use types::*;
