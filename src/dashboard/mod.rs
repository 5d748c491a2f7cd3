//! Dashboard view state and the frame it renders to

pub mod screen;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::data::{Dataset, GridGenerator, GridPolicy, StatusGrid};
use screen::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tab {
    General,
    Request,
    Response,
    #[default]
    Compliance,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::General, Tab::Request, Tab::Response, Tab::Compliance];

    pub fn label(self) -> &'static str {
        match self {
            Tab::General => "General",
            Tab::Request => "Request",
            Tab::Response => "Response",
            Tab::Compliance => "Compliance",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Owns the tab selection, the current grid and the data set.
///
/// The active tab only affects the tab strip; every panel renders the same
/// content whichever tab is selected.
pub struct DashboardView {
    active_tab: Tab,
    dataset: Dataset,
    grid: StatusGrid,
    generator: GridGenerator,
}

impl DashboardView {
    pub fn new(dataset: Dataset, mut generator: GridGenerator) -> Self {
        let grid = generator.generate();
        Self {
            active_tab: Tab::default(),
            dataset,
            grid,
            generator,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn grid(&self) -> &StatusGrid {
        &self.grid
    }

    /// Returns whether the selection changed. Reselecting the active tab is a no-op.
    pub fn select_tab(&mut self, tab: Tab) -> bool {
        if self.active_tab == tab {
            return false;
        }
        debug!(from = %self.active_tab, to = %tab, "Tab selected");
        self.active_tab = tab;
        self.on_state_change();
        true
    }

    pub fn replace_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.on_state_change();
    }

    pub fn reroll_grid(&mut self) {
        self.grid = self.generator.generate();
    }

    fn on_state_change(&mut self) {
        if self.generator.policy() == GridPolicy::Reroll {
            self.reroll_grid();
        }
    }

    pub fn render(&self) -> Screen {
        Screen {
            header: self.render_header(),
            left: LeftPane {
                grid: GridPanel {
                    column_labels: self.grid.header_labels(),
                    rows: self.grid.rows.clone(),
                },
                response_chart: ResponseChart {
                    color: RESPONSE_BAR_COLOR,
                    bars: self
                        .dataset
                        .response_times
                        .iter()
                        .map(|s| ResponseBar {
                            label: s.time.clone(),
                            ms: s.ms,
                        })
                        .collect(),
                },
                message: self.dataset.message.clone(),
            },
            right: self.render_right_pane(),
        }
    }

    fn render_header(&self) -> Header {
        let op = &self.dataset.operation;
        Header {
            title: op.title.clone(),
            date_range: op.date_range.clone(),
            legend: vec![
                LegendEntry {
                    label: "Downtime".to_string(),
                    color: DOWNTIME_COLOR,
                },
                LegendEntry {
                    label: "Uptime".to_string(),
                    color: UPTIME_COLOR,
                },
            ],
            suite_caption: "API name in".to_string(),
            suite_name: op.suite_name.clone(),
            suite_path: op.suite_path.clone(),
        }
    }

    fn render_right_pane(&self) -> RightPane {
        let op = &self.dataset.operation;
        let center_value = self.dataset.donut.first().map(|s| s.value).unwrap_or(0.0);

        RightPane {
            suite_name: op.suite_name.clone(),
            tabs: Tab::ALL
                .iter()
                .map(|&tab| TabButton {
                    tab,
                    label: tab.label().to_string(),
                    active: tab == self.active_tab,
                })
                .collect(),
            operation: OperationDetails {
                operation_name: op.operation_name.clone(),
                swagger_name: op.swagger_name.clone(),
                status: op.status,
                status_text: title_case(op.status.as_str()),
            },
            report: ComplianceReport {
                title: "Compliance Report".to_string(),
                columns: [
                    "Type".to_string(),
                    "Compliance Status".to_string(),
                    "Security Threat".to_string(),
                ],
                rows: self
                    .dataset
                    .compliance_items
                    .iter()
                    .map(|item| ReportRow {
                        field_type: item.field_type.clone(),
                        status: item.status,
                        status_text: item.status.label().to_string(),
                        threat: item.threat.clone(),
                    })
                    .collect(),
            },
            donut: DonutChart {
                title: "Total Traffic".to_string(),
                total: op.total_traffic,
                caption: "Requests".to_string(),
                center_label: format_count(center_value),
                slices: self.dataset.donut.clone(),
            },
            breakup: BreakupChart {
                title: "Non Compliant Breakup".to_string(),
                slices: self.dataset.breakup.clone(),
            },
        }
    }
}

/// `non-compliant` -> `Non-Compliant`
fn title_case(text: &str) -> String {
    text.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join("-")
}
