use eframe::egui;

use super::theme;
use crate::dashboard::screen::Header;

pub fn render(ui: &mut egui::Ui, header: &Header) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&header.title).size(20.0));
            ui.label(theme::muted(&header.date_range));
        });

        ui.add_space(40.0);

        for entry in &header.legend {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, egui::Color32::from(entry.color));
            ui.label(egui::RichText::new(&entry.label).size(13.0));
            ui.add_space(12.0);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            theme::card().show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(theme::muted(&header.suite_caption));
                    ui.label(egui::RichText::new(&header.suite_name).strong());
                    ui.label(theme::muted(&header.suite_path).size(11.0));
                });
            });
        });
    });
    ui.add_space(8.0);
}
