//! Dark palette shared by the dashboard panels

use eframe::egui::{self, Color32};

pub const BACKGROUND: Color32 = Color32::from_rgb(0x1a, 0x1a, 0x1a);
pub const CARD: Color32 = Color32::from_rgb(0x1f, 0x29, 0x37);
pub const CARD_INNER: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);
pub const BORDER: Color32 = Color32::from_rgb(0x4b, 0x55, 0x63);
pub const TEXT: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb);
pub const MUTED: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf);
pub const ACCENT: Color32 = Color32::from_rgb(0x3b, 0x82, 0xf6);
pub const OK: Color32 = Color32::from_rgb(0x22, 0xc5, 0x5e);
pub const ERROR: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
pub const ERROR_SOFT: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71);

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = BACKGROUND;
    visuals.window_fill = CARD;
    visuals.override_text_color = Some(TEXT);
    ctx.set_visuals(visuals);
}

pub fn card() -> egui::Frame {
    egui::Frame::none()
        .fill(CARD)
        .rounding(6.0)
        .inner_margin(12.0)
}

pub fn inner_card() -> egui::Frame {
    egui::Frame::none()
        .fill(CARD_INNER)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .rounding(4.0)
        .inner_margin(10.0)
}

pub fn muted(text: impl Into<String>) -> egui::RichText {
    egui::RichText::new(text).color(MUTED).size(12.0)
}

pub fn status_color(compliant: bool) -> Color32 {
    if compliant {
        OK
    } else {
        ERROR
    }
}

pub fn status_icon(compliant: bool) -> &'static str {
    if compliant {
        "✔"
    } else {
        "✖"
    }
}
