//! Everything the dashboard displays, loadable from a TOML file

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use super::findings::{self, Finding};
use super::samples;
use super::types::{ChartSlice, ComplianceItem, Message, OperationInfo, ResponseTimeSample};
use crate::error::{DashboardError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub operation: OperationInfo,
    pub message: Message,
    pub response_times: Vec<ResponseTimeSample>,
    pub compliance_items: Vec<ComplianceItem>,
    pub donut: Vec<ChartSlice>,
    pub breakup: Vec<ChartSlice>,
    /// When present, `donut`, `breakup` and the total traffic are derived from it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub findings: Option<Vec<Finding>>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            operation: samples::operation_info(),
            message: samples::message(),
            response_times: samples::response_times(),
            compliance_items: samples::compliance_items(),
            donut: samples::donut_slices(),
            breakup: samples::breakup_slices(),
            findings: None,
        }
    }
}

impl Dataset {
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading dataset from: {:?}", path);
        let content =
            std::fs::read_to_string(path).map_err(|e| DashboardError::io(path, e))?;
        let dataset = Self::from_toml_str(&content)?;
        debug!(
            items = dataset.compliance_items.len(),
            samples = dataset.response_times.len(),
            derived = dataset.findings.is_some(),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut dataset: Dataset = toml::from_str(content)?;
        dataset.apply_findings();
        dataset.validate()?;
        Ok(dataset)
    }

    fn apply_findings(&mut self) {
        if let Some(list) = &self.findings {
            self.donut = findings::donut_slices(list);
            self.breakup = findings::non_compliant_breakup(list);
            self.operation.total_traffic = findings::total_traffic(list);
        }
    }

    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.compliance_items.is_empty() {
            errors.push("compliance_items must not be empty".to_string());
        }

        for (chart, slices) in [("donut", &self.donut), ("breakup", &self.breakup)] {
            for slice in slices.iter() {
                if !slice.value.is_finite() || slice.value < 0.0 {
                    errors.push(format!(
                        "{} slice {:?} has invalid value {}",
                        chart, slice.name, slice.value
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DashboardError::InvalidDataset(errors.join("; ")))
        }
    }

    /// Donut total; equals `operation.total_traffic` only when derived from findings.
    pub fn donut_total(&self) -> f64 {
        self.donut.iter().map(|s| s.value).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::types::ComplianceStatus;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_dataset_is_valid() {
        let dataset = Dataset::default();
        assert!(dataset.validate().is_ok());
        assert_eq!(dataset.compliance_items.len(), 6);
        assert_eq!(dataset.donut_total(), 185.0);
    }

    #[test]
    fn test_empty_file_falls_back_to_samples() {
        let dataset = Dataset::from_toml_str("").unwrap();
        assert_eq!(dataset, Dataset::default());
    }

    #[test]
    fn test_partial_operation_section() {
        let dataset = Dataset::from_toml_str(
            r#"
[operation]
operation_name = "getAccounts"
"#,
        )
        .unwrap();
        assert_eq!(dataset.operation.operation_name, "getAccounts");
        assert_eq!(dataset.operation.suite_name, "Test Suite");
    }

    #[test]
    fn test_findings_drive_charts_and_total() {
        let dataset = Dataset::from_toml_str(
            r#"
[[findings]]
field = "Header"
status = "non-compliant"
count = 4

[[findings]]
field = "Path"
status = "compliant"
count = 6
"#,
        )
        .unwrap();
        assert_eq!(dataset.operation.total_traffic, 10);
        assert_eq!(dataset.donut_total(), 10.0);
        assert_eq!(dataset.breakup.len(), 1);
        assert_eq!(dataset.breakup[0].name, "Header");
    }

    #[test]
    fn test_custom_compliance_items() {
        let dataset = Dataset::from_toml_str(
            r#"
[[compliance_items]]
type = "header"
status = "non-compliant"
threat = "Injection"
"#,
        )
        .unwrap();
        assert_eq!(dataset.compliance_items.len(), 1);
        assert_eq!(dataset.compliance_items[0].status, ComplianceStatus::NonCompliant);
        assert_eq!(dataset.compliance_items[0].threat, "Injection");
    }

    #[test]
    fn test_empty_compliance_items_rejected() {
        let err = Dataset::from_toml_str("compliance_items = []").unwrap_err();
        assert!(matches!(err, DashboardError::InvalidDataset(_)));
    }

    #[test]
    fn test_negative_slice_rejected() {
        let err = Dataset::from_toml_str(
            r##"
[[donut]]
name = "Compliant"
value = -1.0
color = "#4ade80"
"##,
        )
        .unwrap_err();
        assert!(err.to_string().contains("donut"));
    }

    #[test]
    fn test_bad_color_is_parse_error() {
        let err = Dataset::from_toml_str(
            r#"
[[breakup]]
name = "Path"
value = 1.0
color = "blue"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, DashboardError::DatasetParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[message]\ntitle = \"Header 9\"").unwrap();
        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.message.title, "Header 9");
        assert_eq!(dataset.message.key, "header key");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Dataset::load(Path::new("/nonexistent/dataset.toml")).unwrap_err();
        assert!(matches!(err, DashboardError::Io { .. }));
    }

    #[test]
    fn test_demo_dataset_parses() {
        let dataset = Dataset::from_toml_str(include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/demos/dataset.toml"
        )))
        .unwrap();
        assert_eq!(dataset.operation.total_traffic, 80);
        assert_eq!(dataset.operation.title, "Monitoring Products API");
        assert_eq!(dataset.compliance_items.len(), 3);
        let breakup: Vec<_> = dataset.breakup.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(breakup, ["Query", "Header"]);
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let text = toml::to_string(&Dataset::default()).unwrap();
        assert_eq!(Dataset::from_toml_str(&text).unwrap(), Dataset::default());
    }
}
