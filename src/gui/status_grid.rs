//! Uptime/downtime matrix: one row per day, one cell per time slot

use eframe::egui;

use super::theme;
use crate::dashboard::screen::{GridPanel, DOWNTIME_COLOR, UPTIME_COLOR};

const DAY_COLUMN_WIDTH: f32 = 64.0;
const CELL_HEIGHT: f32 = 16.0;
const CELL_GAP: f32 = 2.0;

pub fn render(ui: &mut egui::Ui, grid: &GridPanel) {
    let columns = grid.column_labels.len().max(1);
    let cell_width = ((ui.available_width() - DAY_COLUMN_WIDTH) / columns as f32).max(4.0);

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.add_space(DAY_COLUMN_WIDTH);
        for label in &grid.column_labels {
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(cell_width, 14.0), egui::Sense::hover());
            if !label.is_empty() {
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    label,
                    egui::FontId::proportional(10.0),
                    theme::MUTED,
                );
            }
        }
    });

    for row in &grid.rows {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            let (label_rect, _) = ui.allocate_exact_size(
                egui::vec2(DAY_COLUMN_WIDTH, CELL_HEIGHT),
                egui::Sense::hover(),
            );
            ui.painter().text(
                label_rect.left_center(),
                egui::Align2::LEFT_CENTER,
                &row.day,
                egui::FontId::proportional(12.0),
                theme::MUTED,
            );

            for status in &row.slots {
                let (rect, response) = ui.allocate_exact_size(
                    egui::vec2(cell_width, CELL_HEIGHT),
                    egui::Sense::hover(),
                );
                let color = if status.is_up() { UPTIME_COLOR } else { DOWNTIME_COLOR };
                ui.painter()
                    .rect_filled(rect.shrink2(egui::vec2(CELL_GAP, 0.0)), 2.0, egui::Color32::from(color));
                response.on_hover_text(if status.is_up() { "Up" } else { "Down" });
            }
        });
        ui.add_space(4.0);
    }
}
