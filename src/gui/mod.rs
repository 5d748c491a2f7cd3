//! egui panels that draw a rendered dashboard frame

pub mod charts;
pub mod header;
pub mod overview_panel;
pub mod report_panel;
pub mod status_grid;
pub mod theme;
