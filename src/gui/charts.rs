//! Response-time bars, the traffic donut and the non-compliant breakup bars

use eframe::egui;
use egui_plot::{Bar, BarChart, GridMark, Plot};
use std::f32::consts::TAU;
use std::ops::RangeInclusive;

use super::theme;
use crate::dashboard::screen::{format_count, format_ms, ResponseChart};
use crate::data::ChartSlice;

const DONUT_INNER_RADIUS: f32 = 60.0;
const DONUT_OUTER_RADIUS: f32 = 80.0;
const DONUT_PADDING: f32 = 5.0 * TAU / 360.0;

pub fn response_time_chart(ui: &mut egui::Ui, chart: &ResponseChart) {
    let color = egui::Color32::from(chart.color);
    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            Bar::new(i as f64, f64::from(bar.ms))
                .width(0.7)
                .name(&bar.label)
                .fill(color)
        })
        .collect();

    let labels: Vec<String> = chart.bars.iter().map(|b| b.label.clone()).collect();

    Plot::new("response_time_chart")
        .height(256.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_y(0.0)
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_label(&labels, mark.value)
        })
        .y_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
            if mark.value < 0.0 {
                String::new()
            } else {
                format_ms(mark.value)
            }
        })
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("{}\n{}", name, format_ms(value.y.round()))
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).color(color).name("ms"));
        });
}

pub fn breakup_chart(ui: &mut egui::Ui, slices: &[ChartSlice]) {
    // Plot y grows upward; reversed labels keep the first slice on top.
    let labels: Vec<String> = slices.iter().rev().map(|s| s.name.clone()).collect();
    let count = slices.len();

    Plot::new("non_compliant_breakup")
        .height(192.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(0.0)
        .y_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_label(&labels, mark.value)
        })
        .x_axis_formatter(|mark: GridMark, _range: &RangeInclusive<f64>| {
            if mark.value < 0.0 {
                String::new()
            } else {
                format_count(mark.value)
            }
        })
        .show(ui, |plot_ui| {
            for (i, slice) in slices.iter().enumerate() {
                let color = egui::Color32::from(slice.color);
                let bar = Bar::new(breakup_position(i, count), slice.value)
                    .width(0.6)
                    .name(&slice.name)
                    .fill(color);
                plot_ui.bar_chart(
                    BarChart::new(vec![bar])
                        .horizontal()
                        .color(color)
                        .name(&slice.name),
                );
            }
        });

    ui.add_space(8.0);
    ui.horizontal_wrapped(|ui| {
        for slice in slices {
            legend_dot(ui, egui::Color32::from(slice.color), &slice.name);
        }
    });
}

pub fn donut_chart(ui: &mut egui::Ui, slices: &[ChartSlice], center_label: &str) {
    let size = 2.0 * DONUT_OUTER_RADIUS + 20.0;
    ui.vertical_centered(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let mid_radius = (DONUT_INNER_RADIUS + DONUT_OUTER_RADIUS) / 2.0;
        let thickness = DONUT_OUTER_RADIUS - DONUT_INNER_RADIUS;

        let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
        for (slice, (start, sweep)) in slices.iter().zip(donut_arcs(&values, DONUT_PADDING)) {
            if sweep <= 0.0 {
                continue;
            }
            let steps = ((sweep / TAU) * 96.0).ceil().max(2.0) as usize;
            let points: Vec<egui::Pos2> = (0..=steps)
                .map(|k| {
                    // Counter-clockwise from 3 o'clock; screen y grows downwards.
                    let angle = start + sweep * k as f32 / steps as f32;
                    center + mid_radius * egui::vec2(angle.cos(), -angle.sin())
                })
                .collect();
            painter.add(egui::Shape::line(
                points,
                egui::Stroke::new(thickness, egui::Color32::from(slice.color)),
            ));
        }

        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            center_label,
            egui::FontId::proportional(18.0),
            theme::TEXT,
        );
    });
}

pub fn legend_dot(ui: &mut egui::Ui, color: egui::Color32, label: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
    ui.painter().circle_filled(rect.center(), 6.0, color);
    ui.label(egui::RichText::new(label).size(12.0));
}

/// Start angle and sweep (radians) for each value, separated by `padding`.
pub fn donut_arcs(values: &[f64], padding: f32) -> Vec<(f32, f32)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let visible = values.iter().filter(|v| **v > 0.0).count();
    if total <= 0.0 {
        return values.iter().map(|_| (0.0, 0.0)).collect();
    }

    let gaps = if visible > 1 { padding * visible as f32 } else { 0.0 };
    let available = (TAU - gaps).max(0.0);
    let mut angle = 0.0_f32;

    values
        .iter()
        .map(|&value| {
            if value <= 0.0 {
                return (angle, 0.0);
            }
            let sweep = available * (value / total) as f32;
            let arc = (angle, sweep);
            angle += sweep + if visible > 1 { padding } else { 0.0 };
            arc
        })
        .collect()
}

/// Label for an integer-positioned category tick; blank between categories.
/// Plot row for the `index`-th of `count` horizontal bars, first at the top.
pub fn breakup_position(index: usize, count: usize) -> f64 {
    count.saturating_sub(index + 1) as f64
}

pub fn category_label(labels: &[String], position: f64) -> String {
    if position < 0.0 || position.fract().abs() > f64::EPSILON {
        return String::new();
    }
    labels.get(position as usize).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        vec!["0:00".to_string(), "2:00".to_string()]
    }

    #[test]
    fn test_category_label_on_integer_ticks() {
        assert_eq!(category_label(&labels(), 0.0), "0:00");
        assert_eq!(category_label(&labels(), 1.0), "2:00");
    }

    #[test]
    fn test_category_label_blank_elsewhere() {
        assert_eq!(category_label(&labels(), 0.5), "");
        assert_eq!(category_label(&labels(), -1.0), "");
        assert_eq!(category_label(&labels(), 2.0), "");
    }

    #[test]
    fn test_breakup_first_slice_drawn_on_top() {
        let slices = crate::data::samples::breakup_slices();
        let count = slices.len();
        let reversed: Vec<String> = slices.iter().rev().map(|s| s.name.clone()).collect();

        assert_eq!(breakup_position(0, count), (count - 1) as f64);
        assert_eq!(breakup_position(count - 1, count), 0.0);
        for (i, slice) in slices.iter().enumerate() {
            assert_eq!(category_label(&reversed, breakup_position(i, count)), slice.name);
        }
    }

    #[test]
    fn test_donut_arcs_proportional_with_padding() {
        let arcs = donut_arcs(&[37.0, 148.0], DONUT_PADDING);
        assert_eq!(arcs.len(), 2);
        let total_sweep: f32 = arcs.iter().map(|(_, s)| s).sum();
        assert!((total_sweep + 2.0 * DONUT_PADDING - TAU).abs() < 1e-4);
        assert!((arcs[1].1 / arcs[0].1 - 4.0).abs() < 1e-3);
        assert!((arcs[1].0 - (arcs[0].1 + DONUT_PADDING)).abs() < 1e-5);
    }

    #[test]
    fn test_donut_single_slice_full_ring() {
        let arcs = donut_arcs(&[10.0, 0.0], DONUT_PADDING);
        assert!((arcs[0].1 - TAU).abs() < 1e-5);
        assert_eq!(arcs[1].1, 0.0);
    }

    #[test]
    fn test_donut_all_zero() {
        assert!(donut_arcs(&[0.0, 0.0], DONUT_PADDING)
            .iter()
            .all(|&(_, sweep)| sweep == 0.0));
    }
}
