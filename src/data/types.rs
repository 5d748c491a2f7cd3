//! Common types for dashboard data sets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

/// Availability of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Up,
    Down,
}

impl SlotStatus {
    pub fn is_up(self) -> bool {
        matches!(self, SlotStatus::Up)
    }
}

/// One row of the uptime/downtime grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayStatus {
    pub day: String,
    pub slots: Vec<SlotStatus>,
}

impl DayStatus {
    pub fn up_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_up()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseTimeSample {
    pub time: String,
    pub ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
}

impl ComplianceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "compliant",
            ComplianceStatus::NonCompliant => "non-compliant",
        }
    }

    /// Label shown in the report, first letter capitalized.
    pub fn label(self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::NonCompliant => "Non-compliant",
        }
    }

    pub fn is_compliant(self) -> bool {
        matches!(self, ComplianceStatus::Compliant)
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compliance verdict for one API message field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceItem {
    #[serde(rename = "type")]
    pub field_type: String,
    pub status: ComplianceStatus,
    pub threat: String,
}

/// A labelled value with its display color, used by the donut and breakup charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub name: String,
    pub value: f64,
    pub color: Rgb,
}

impl ChartSlice {
    pub fn new(name: &str, value: f64, color: Rgb) -> Self {
        Self {
            name: name.to_string(),
            value,
            color,
        }
    }
}

/// Metadata about the operation under test, shown in the header and report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OperationInfo {
    pub title: String,
    pub date_range: String,
    pub suite_name: String,
    pub suite_path: String,
    pub operation_name: String,
    pub swagger_name: String,
    pub status: ComplianceStatus,
    pub total_traffic: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    pub title: String,
    pub key: String,
    pub body: String,
    pub status: ComplianceStatus,
}

/// An sRGB color, written as `#rrggbb` in data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl FromStr for Rgb {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DashboardError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = DashboardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

impl From<Rgb> for egui::Color32 {
    fn from(value: Rgb) -> Self {
        egui::Color32::from_rgb(value.0, value.1, value.2)
    }
}
