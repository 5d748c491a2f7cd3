//! Chart data derived from a single list of compliance findings

use serde::{Deserialize, Serialize};

use super::samples::{COMPLIANT_GREEN, NON_COMPLIANT_RED};
use super::types::{ChartSlice, ComplianceStatus, Rgb};

const BREAKUP_PALETTE: [Rgb; 6] = [
    Rgb::new(0x60, 0xa5, 0xfa),
    Rgb::new(0xf4, 0x72, 0xb6),
    Rgb::new(0x38, 0xbd, 0xf8),
    Rgb::new(0xa7, 0x8b, 0xfa),
    Rgb::new(0x4a, 0xde, 0x80),
    Rgb::new(0xfb, 0xbf, 0x24),
];

/// `count` observed requests whose `field` had the given verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub field: String,
    pub status: ComplianceStatus,
    #[serde(default = "default_count")]
    pub count: u64,
}

fn default_count() -> u64 {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub compliant: u64,
    pub non_compliant: u64,
}

impl StatusCounts {
    pub fn total(&self) -> u64 {
        self.compliant + self.non_compliant
    }
}

pub fn status_counts(findings: &[Finding]) -> StatusCounts {
    findings
        .iter()
        .fold(StatusCounts::default(), |mut acc, f| {
            match f.status {
                ComplianceStatus::Compliant => acc.compliant += f.count,
                ComplianceStatus::NonCompliant => acc.non_compliant += f.count,
            }
            acc
        })
}

pub fn total_traffic(findings: &[Finding]) -> u64 {
    status_counts(findings).total()
}

/// Donut slices in the order compliant, non-compliant.
pub fn donut_slices(findings: &[Finding]) -> Vec<ChartSlice> {
    let counts = status_counts(findings);
    vec![
        ChartSlice::new("Compliant", counts.compliant as f64, COMPLIANT_GREEN),
        ChartSlice::new("Non-Compliant", counts.non_compliant as f64, NON_COMPLIANT_RED),
    ]
}

/// Non-compliant counts per field, in order of first appearance.
pub fn non_compliant_breakup(findings: &[Finding]) -> Vec<ChartSlice> {
    let mut slices: Vec<ChartSlice> = Vec::new();
    for finding in findings.iter().filter(|f| !f.status.is_compliant()) {
        match slices.iter_mut().find(|s| s.name == finding.field) {
            Some(slice) => slice.value += finding.count as f64,
            None => {
                let color = BREAKUP_PALETTE[slices.len() % BREAKUP_PALETTE.len()];
                slices.push(ChartSlice::new(&finding.field, finding.count as f64, color));
            }
        }
    }
    slices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(field: &str, status: ComplianceStatus, count: u64) -> Finding {
        Finding {
            field: field.to_string(),
            status,
            count,
        }
    }

    fn sample() -> Vec<Finding> {
        use ComplianceStatus::*;
        vec![
            finding("Header", NonCompliant, 20),
            finding("Path", Compliant, 30),
            finding("Query", NonCompliant, 5),
            finding("Header", NonCompliant, 5),
            finding("Body", Compliant, 7),
        ]
    }

    #[test]
    fn test_status_counts() {
        let counts = status_counts(&sample());
        assert_eq!(counts.compliant, 37);
        assert_eq!(counts.non_compliant, 30);
        assert_eq!(total_traffic(&sample()), 67);
    }

    #[test]
    fn test_donut_matches_counts() {
        let donut = donut_slices(&sample());
        assert_eq!(donut[0].name, "Compliant");
        assert_eq!(donut[0].value, 37.0);
        assert_eq!(donut[1].value, 30.0);
        assert_eq!(donut[1].color, NON_COMPLIANT_RED);
    }

    #[test]
    fn test_breakup_groups_by_field_in_first_seen_order() {
        let breakup = non_compliant_breakup(&sample());
        let named: Vec<_> = breakup.iter().map(|s| (s.name.as_str(), s.value)).collect();
        assert_eq!(named, [("Header", 25.0), ("Query", 5.0)]);
        assert_eq!(breakup[0].color, BREAKUP_PALETTE[0]);
        assert_eq!(breakup[1].color, BREAKUP_PALETTE[1]);
    }

    #[test]
    fn test_breakup_sum_equals_non_compliant_count() {
        let findings = sample();
        let sum: f64 = non_compliant_breakup(&findings).iter().map(|s| s.value).sum();
        assert_eq!(sum as u64, status_counts(&findings).non_compliant);
    }

    #[test]
    fn test_empty_findings() {
        assert_eq!(total_traffic(&[]), 0);
        assert!(non_compliant_breakup(&[]).is_empty());
    }

    #[test]
    fn test_count_defaults_to_one() {
        let parsed: Finding =
            toml::from_str("field = \"Header\"\nstatus = \"non-compliant\"").unwrap();
        assert_eq!(parsed.count, 1);
    }
}
