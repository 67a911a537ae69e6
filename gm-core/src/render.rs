//! Widget-independent view models for the trend chart and the risk map.
//!
//! Rendering backends implement [`SeriesRenderer`] and [`MarkerRenderer`];
//! the browser app drives D3 and Leaflet through them, tests record calls.

use crate::dates::day_label;
use crate::merge::RiskLevel;
use crate::parameter::Parameter;
use crate::record::{DailyRecord, MergedLocation};
use serde::{Deserialize, Serialize};

/// Fixed curve tension of the trend line.
pub const CURVE_TENSION: f64 = 0.3;

pub const LINE_COLOR: &str = "#006fff";
pub const FILL_COLOR: &str = "rgba(0, 111, 255, 0.2)";
pub const THRESHOLD_COLOR: &str = "red";

pub const MARKER_RADIUS: u32 = 8;
pub const MARKER_STROKE: &str = "black";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdLine {
    pub value: f64,
    pub label: String,
    pub color: String,
}

/// A single labeled series with one horizontal reference line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendChart {
    pub parameter: Parameter,
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub points: Vec<SeriesPoint>,
    pub threshold: ThresholdLine,
    pub tension: f64,
    pub line_color: String,
    pub fill_color: String,
}

impl TrendChart {
    pub fn build(records: &[DailyRecord], parameter: Parameter) -> TrendChart {
        let axis = parameter.axis_label();
        let threshold = parameter.threshold();
        TrendChart {
            parameter,
            title: format!("River Quality ({})", axis),
            x_axis_label: "Date".to_string(),
            y_axis_label: axis,
            points: records
                .iter()
                .enumerate()
                .map(|(i, r)| SeriesPoint {
                    label: day_label(i),
                    value: r.value(parameter),
                })
                .collect(),
            threshold: ThresholdLine {
                value: threshold,
                label: format!("Threshold ({})", threshold),
                color: THRESHOLD_COLOR.to_string(),
            },
            tension: CURVE_TENSION,
            line_color: LINE_COLOR.to_string(),
            fill_color: FILL_COLOR.to_string(),
        }
    }
}

/// Initial map viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub center_longitude: f64,
    pub center_latitude: f64,
    pub zoom: u8,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center_longitude: 85.0,
            center_latitude: 25.0,
            zoom: 6,
        }
    }
}

/// A circle marker plus the detail shown in its popup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapMarker {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub risk: RiskLevel,
    pub fill_color: String,
    pub stroke_color: String,
    pub radius: u32,
    pub ph: String,
    pub dissolved_oxygen: String,
    pub bod: String,
    pub total_coliform: String,
}

impl From<&MergedLocation> for MapMarker {
    fn from(m: &MergedLocation) -> Self {
        let risk = RiskLevel::from_flag(m.risk_flag);
        MapMarker {
            name: m.name.clone(),
            latitude: m.latitude,
            longitude: m.longitude,
            risk,
            fill_color: risk.color().to_string(),
            stroke_color: MARKER_STROKE.to_string(),
            radius: MARKER_RADIUS,
            ph: format!("{:.2}", m.ph),
            dissolved_oxygen: format!("{:.2}", m.dissolved_oxygen),
            bod: format!("{:.2}", m.bod),
            total_coliform: m.total_coliform.to_string(),
        }
    }
}

pub fn markers(merged: &[MergedLocation]) -> Vec<MapMarker> {
    merged.iter().map(MapMarker::from).collect()
}

/// Renders a labeled time series with one reference line.
pub trait SeriesRenderer {
    fn render_series(&mut self, chart: &TrendChart);
}

/// Renders point markers with click-activated popups on a pannable base layer.
///
/// Implementations must not create the base layer for an empty marker set.
pub trait MarkerRenderer {
    fn render_markers(&mut self, view: &MapView, markers: &[MapMarker]);
}
