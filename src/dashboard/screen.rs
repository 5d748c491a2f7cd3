//! Toolkit-independent description of one rendered dashboard frame

use serde::Serialize;

use super::Tab;
use crate::data::{ChartSlice, ComplianceStatus, DayStatus, Message, Rgb};

pub const RESPONSE_BAR_COLOR: Rgb = Rgb::new(0x3b, 0x82, 0xf6);
pub const UPTIME_COLOR: Rgb = Rgb::new(0x22, 0xc5, 0x5e);
pub const DOWNTIME_COLOR: Rgb = Rgb::new(0xef, 0x44, 0x44);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screen {
    pub header: Header,
    pub left: LeftPane,
    pub right: RightPane,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    pub title: String,
    pub date_range: String,
    pub legend: Vec<LegendEntry>,
    pub suite_caption: String,
    pub suite_name: String,
    pub suite_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeftPane {
    pub grid: GridPanel,
    pub response_chart: ResponseChart,
    pub message: Message,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridPanel {
    pub column_labels: Vec<String>,
    pub rows: Vec<DayStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseChart {
    pub color: Rgb,
    pub bars: Vec<ResponseBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseBar {
    pub label: String,
    pub ms: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RightPane {
    pub suite_name: String,
    pub tabs: Vec<TabButton>,
    pub operation: OperationDetails,
    pub report: ComplianceReport,
    pub donut: DonutChart,
    pub breakup: BreakupChart,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabButton {
    pub tab: Tab,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationDetails {
    pub operation_name: String,
    pub swagger_name: String,
    pub status: ComplianceStatus,
    pub status_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceReport {
    pub title: String,
    pub columns: [String; 3],
    pub rows: Vec<ReportRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub field_type: String,
    pub status: ComplianceStatus,
    pub status_text: String,
    pub threat: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutChart {
    pub title: String,
    pub total: u64,
    pub caption: String,
    pub center_label: String,
    pub slices: Vec<ChartSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakupChart {
    pub title: String,
    pub slices: Vec<ChartSlice>,
}

/// Axis tick text for the response-time chart.
pub fn format_ms(value: f64) -> String {
    format!("{} ms", format_count(value))
}

/// Whole numbers without a fractional part, others with one decimal.
pub fn format_count(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}
