//! Left pane: availability grid, response times and the message card

use eframe::egui;

use super::{charts, status_grid, theme};
use crate::dashboard::screen::LeftPane;
use crate::data::Message;

pub fn render(ui: &mut egui::Ui, pane: &LeftPane) {
    status_grid::render(ui, &pane.grid);

    ui.add_space(32.0);
    charts::response_time_chart(ui, &pane.response_chart);

    ui.add_space(32.0);
    render_message(ui, &pane.message);
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    theme::card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new("Messages").size(14.0).strong());
        ui.add_space(8.0);

        theme::inner_card().show(ui, |ui| {
            ui.set_width(ui.available_width());
            let compliant = message.status.is_compliant();
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(theme::status_icon(compliant))
                        .color(theme::status_color(compliant))
                        .size(16.0),
                );
                ui.label(egui::RichText::new(&message.title).size(12.0));
            });
            ui.label(egui::RichText::new(&message.key).size(12.0).strong());
            ui.add_space(6.0);
            ui.label(theme::muted(&message.body));
        });
    });
}
