//! Dashboard state as immutable snapshots.
//!
//! Every change goes through [`DashboardState::reduce`], and everything the
//! dashboard draws (markers, chart, forecast rows) is derived from a snapshot
//! by a pure function.

use crate::dates::forecast_label;
use crate::generator::DailyWindow;
use crate::merge::merge_locations;
use crate::parameter::Parameter;
use crate::record::{DailyRecord, Location, MergedLocation};
use crate::render::TrendChart;

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    WindowGenerated(DailyWindow),
    SelectParameter(Parameter),
    /// Select by code; unknown codes fall back to pH.
    SelectParameterCode(Option<String>),
    SelectLocation(String),
    ClearLocation,
}

/// One line of the forecast list.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRow {
    pub label: String,
    pub value: String,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub window: Option<DailyWindow>,
    pub parameter: Parameter,
    pub location: Option<String>,
}

impl DashboardState {
    pub fn reduce(&self, action: DashboardAction) -> DashboardState {
        let mut next = self.clone();
        match action {
            DashboardAction::WindowGenerated(window) => next.window = Some(window),
            DashboardAction::SelectParameter(parameter) => next.parameter = parameter,
            DashboardAction::SelectParameterCode(code) => {
                next.parameter = Parameter::from_code_or_default(code.as_deref())
            }
            DashboardAction::SelectLocation(name) => {
                let name = name.trim();
                next.location = (!name.is_empty()).then(|| name.to_string());
            }
            DashboardAction::ClearLocation => next.location = None,
        }
        next
    }

    pub fn records(&self) -> &[DailyRecord] {
        self.window.as_ref().map(DailyWindow::records).unwrap_or(&[])
    }

    pub fn today_record(&self) -> Option<&DailyRecord> {
        self.window.as_ref().and_then(DailyWindow::today_record)
    }

    /// Empty until a window has been generated.
    pub fn merged_locations(&self, locations: &[Location]) -> Vec<MergedLocation> {
        match self.today_record() {
            Some(today) => merge_locations(locations, today),
            None => Vec::new(),
        }
    }

    pub fn trend_chart(&self) -> Option<TrendChart> {
        let records = self.records();
        if records.is_empty() {
            None
        } else {
            Some(TrendChart::build(records, self.parameter))
        }
    }

    pub fn forecast_rows(&self) -> Vec<ForecastRow> {
        let today = self.window.as_ref().map(DailyWindow::today);
        self.records()
            .iter()
            .map(|r| ForecastRow {
                label: forecast_label(&r.date),
                value: r.formatted_value(self.parameter),
                is_today: Some(r.date) == today,
            })
            .collect()
    }
}
