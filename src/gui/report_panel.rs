//! Right pane: tab strip, operation details, compliance table and charts

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use super::{charts, theme};
use crate::dashboard::screen::{
    ComplianceReport, DonutChart, OperationDetails, RightPane, TabButton,
};
use crate::dashboard::Tab;
use crate::data::samples::{COMPLIANT_GREEN, NON_COMPLIANT_RED};

/// Returns the tab clicked this frame, if any.
pub fn render(ui: &mut egui::Ui, pane: &RightPane) -> Option<Tab> {
    ui.add_space(8.0);
    ui.label(egui::RichText::new(&pane.suite_name).size(20.0));
    ui.add_space(12.0);

    let clicked = render_tabs(ui, &pane.tabs);
    ui.separator();

    render_operation(ui, &pane.operation);
    ui.separator();

    ui.add_space(8.0);
    render_report(ui, &pane.report);
    ui.add_space(32.0);

    ui.columns(2, |columns| {
        render_donut(&mut columns[0], &pane.donut);

        columns[1].label(egui::RichText::new(&pane.breakup.title).size(14.0).strong());
        columns[1].add_space(12.0);
        charts::breakup_chart(&mut columns[1], &pane.breakup.slices);
    });

    clicked
}

fn render_tabs(ui: &mut egui::Ui, tabs: &[TabButton]) -> Option<Tab> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        for button in tabs {
            let text = egui::RichText::new(&button.label)
                .size(14.0)
                .color(if button.active { egui::Color32::WHITE } else { theme::MUTED });
            let response = ui.add(
                egui::Button::new(text)
                    .frame(false)
                    .min_size(egui::vec2(96.0, 36.0)),
            );
            if button.active {
                let rect = response.rect;
                ui.painter().hline(
                    rect.x_range(),
                    rect.bottom(),
                    egui::Stroke::new(2.0, theme::ACCENT),
                );
            }
            if response.clicked() {
                clicked = Some(button.tab);
            }
        }
    });
    clicked
}

fn render_operation(ui: &mut egui::Ui, operation: &OperationDetails) {
    egui::Grid::new("operation_details")
        .num_columns(3)
        .spacing([48.0, 4.0])
        .show(ui, |ui| {
            ui.label(theme::muted("Operation Name"));
            ui.label(theme::muted("Swagger Name"));
            ui.label(theme::muted("Status"));
            ui.end_row();

            ui.label(egui::RichText::new(&operation.operation_name).strong());
            ui.label(egui::RichText::new(&operation.swagger_name).strong());
            let compliant = operation.status.is_compliant();
            let color = if compliant { theme::OK } else { theme::ERROR_SOFT };
            ui.label(
                egui::RichText::new(format!(
                    "{} {}",
                    if compliant { "✔" } else { "⚠" },
                    operation.status_text
                ))
                .color(color),
            );
            ui.end_row();
        });
}

fn render_report(ui: &mut egui::Ui, report: &ComplianceReport) {
    ui.label(egui::RichText::new(&report.title).size(17.0));
    ui.add_space(12.0);

    TableBuilder::new(ui)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder())
        .column(Column::remainder())
        .column(Column::remainder())
        .header(22.0, |mut header| {
            for title in &report.columns {
                header.col(|ui| {
                    ui.label(theme::muted(title));
                });
            }
        })
        .body(|mut body| {
            for row in &report.rows {
                body.row(32.0, |mut table_row| {
                    table_row.col(|ui| {
                        ui.label(&row.field_type);
                    });
                    table_row.col(|ui| {
                        let compliant = row.status.is_compliant();
                        ui.label(
                            egui::RichText::new(format!(
                                "{} {}",
                                theme::status_icon(compliant),
                                row.status_text
                            ))
                            .color(theme::status_color(compliant)),
                        );
                    });
                    table_row.col(|ui| {
                        ui.label(egui::RichText::new(&row.threat).color(theme::TEXT));
                    });
                });
            }
        });
}

fn render_donut(ui: &mut egui::Ui, donut: &DonutChart) {
    theme::card().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&donut.title).size(14.0).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(donut.total.to_string()).size(24.0).strong());
            });
        });
        ui.label(theme::muted(&donut.caption).size(11.0));
        ui.add_space(12.0);

        charts::donut_chart(ui, &donut.slices, &donut.center_label);

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            charts::legend_dot(ui, COMPLIANT_GREEN.into(), "Compliant");
            ui.add_space(24.0);
            charts::legend_dot(ui, NON_COMPLIANT_RED.into(), "Non-Compliant");
        });
    });
}
