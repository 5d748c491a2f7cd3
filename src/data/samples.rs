//! Built-in sample data shown when no dataset file is configured

use super::types::{
    ChartSlice, ComplianceItem, ComplianceStatus, Message, OperationInfo, ResponseTimeSample, Rgb,
};

pub const COMPLIANT_GREEN: Rgb = Rgb::new(0x4a, 0xde, 0x80);
pub const NON_COMPLIANT_RED: Rgb = Rgb::new(0xf8, 0x71, 0x71);

pub const TIME_SLOTS: [&str; 12] = [
    "00:00", "00:15", "00:25", "00:35", "00:45", "00:55", "01:05", "01:15", "01:25", "01:35",
    "01:45", "01:55",
];

const RESPONSE_TIMES: [(&str, u32); 16] = [
    ("0:00", 230),
    ("2:00", 654),
    ("2:30", 457),
    ("3:00", 520),
    ("3:30", 380),
    ("4:00", 420),
    ("4:30", 290),
    ("5:00", 310),
    ("5:30", 280),
    ("6:00", 350),
    ("7:00", 180),
    ("8:00", 450),
    ("9:00", 530),
    ("10:00", 380),
    ("11:00", 290),
    ("12:00", 420),
];

pub fn time_slots() -> Vec<String> {
    TIME_SLOTS.iter().map(|s| s.to_string()).collect()
}

pub fn response_times() -> Vec<ResponseTimeSample> {
    RESPONSE_TIMES
        .iter()
        .map(|&(time, ms)| ResponseTimeSample {
            time: time.to_string(),
            ms,
        })
        .collect()
}

pub fn compliance_items() -> Vec<ComplianceItem> {
    [
        ("requestBody", ComplianceStatus::Compliant),
        ("responseBody", ComplianceStatus::Compliant),
        ("header", ComplianceStatus::NonCompliant),
        ("path", ComplianceStatus::Compliant),
        ("query", ComplianceStatus::Compliant),
        ("formData", ComplianceStatus::Compliant),
    ]
    .into_iter()
    .map(|(field_type, status)| ComplianceItem {
        field_type: field_type.to_string(),
        status,
        threat: "No Threats".to_string(),
    })
    .collect()
}

pub fn donut_slices() -> Vec<ChartSlice> {
    vec![
        ChartSlice::new("Compliant", 37.0, COMPLIANT_GREEN),
        ChartSlice::new("Non-Compliant", 148.0, NON_COMPLIANT_RED),
    ]
}

pub fn breakup_slices() -> Vec<ChartSlice> {
    vec![
        ChartSlice::new("Request Body", 20.0, Rgb::new(0x60, 0xa5, 0xfa)),
        ChartSlice::new("Response Body", 35.0, Rgb::new(0xf4, 0x72, 0xb6)),
        ChartSlice::new("Path", 15.0, Rgb::new(0x38, 0xbd, 0xf8)),
        ChartSlice::new("Header", 25.0, Rgb::new(0xa7, 0x8b, 0xfa)),
        ChartSlice::new("Query", 5.0, COMPLIANT_GREEN),
        ChartSlice::new("Form", 10.0, Rgb::new(0xfb, 0xbf, 0x24)),
    ]
}

pub fn operation_info() -> OperationInfo {
    OperationInfo {
        title: "Monitoring Products API".to_string(),
        date_range: "18 Nov - 22 Nov".to_string(),
        suite_name: "Test Suite".to_string(),
        suite_path: "Test Suite > Acme Bank Branch Location v1".to_string(),
        operation_name: "getListOfBranchLocations".to_string(),
        swagger_name: "Acme Bank Branch Location".to_string(),
        status: ComplianceStatus::NonCompliant,
        total_traffic: 185,
    }
}

pub fn message() -> Message {
    Message {
        title: "Header 3".to_string(),
        key: "header key".to_string(),
        body: "The header Param (x-fapi-financial-id) is compliant".to_string(),
        status: ComplianceStatus::Compliant,
    }
}

impl Default for OperationInfo {
    fn default() -> Self {
        operation_info()
    }
}

impl Default for Message {
    fn default() -> Self {
        message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_donut_literals_match_total_traffic() {
        // Incidental: both numbers are literals, nothing derives one from the other.
        let donut = donut_slices();
        assert_eq!(donut[0].value, 37.0);
        assert_eq!(donut[1].value, 148.0);
        let sum: f64 = donut.iter().map(|s| s.value).sum();
        assert_eq!(sum as u64, operation_info().total_traffic);
    }

    #[test]
    fn test_compliance_items_order() {
        let types: Vec<_> = compliance_items()
            .into_iter()
            .map(|i| i.field_type)
            .collect();
        assert_eq!(
            types,
            ["requestBody", "responseBody", "header", "path", "query", "formData"]
        );
    }

    #[test]
    fn test_only_header_is_non_compliant() {
        let non_compliant: Vec<_> = compliance_items()
            .into_iter()
            .filter(|i| !i.status.is_compliant())
            .collect();
        assert_eq!(non_compliant.len(), 1);
        assert_eq!(non_compliant[0].field_type, "header");
    }

    #[test]
    fn test_response_times_keep_literal_order() {
        let samples = response_times();
        assert_eq!(samples.len(), 16);
        assert_eq!(samples.first().map(|s| s.ms), Some(230));
        assert_eq!(samples[1].time, "2:00");
        assert_eq!(samples.last().map(|s| s.time.as_str()), Some("12:00"));
    }

    #[test]
    fn test_breakup_colors() {
        let colors: Vec<_> = breakup_slices().iter().map(|s| s.color.to_hex()).collect();
        assert_eq!(
            colors,
            ["#60a5fa", "#f472b6", "#38bdf8", "#a78bfa", "#4ade80", "#fbbf24"]
        );
    }
}
