//! Browser implementations of the core renderer traits.

use crate::js_bridge;
use gm_core::render::{MapMarker, MapView, MarkerRenderer, SeriesRenderer, TrendChart};

/// Renders the trend chart with D3 into a container div.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct D3TrendChart {
    container_id: String,
}

impl D3TrendChart {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
        }
    }
}

impl SeriesRenderer for D3TrendChart {
    fn render_series(&mut self, chart: &TrendChart) {
        match serde_json::to_string(chart) {
            Ok(json) => js_bridge::render_trend_chart(&self.container_id, &json),
            Err(e) => log::error!("[GM] serializing trend chart failed: {}", e),
        }
    }
}

/// Renders risk markers with Leaflet into a container div.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafletRiverMap {
    container_id: String,
}

impl LeafletRiverMap {
    pub fn new(container_id: impl Into<String>) -> Self {
        Self {
            container_id: container_id.into(),
        }
    }

    pub fn destroy(&self) {
        js_bridge::destroy_river_map(&self.container_id);
    }
}

impl MarkerRenderer for LeafletRiverMap {
    fn render_markers(&mut self, view: &MapView, markers: &[MapMarker]) {
        // No base map until there is something to put on it.
        if markers.is_empty() {
            return;
        }
        let view_json = serde_json::to_string(view);
        let markers_json = serde_json::to_string(markers);
        match (view_json, markers_json) {
            (Ok(view), Ok(markers)) => {
                js_bridge::render_river_map(&self.container_id, &view, &markers)
            }
            (Err(e), _) | (_, Err(e)) => log::error!("[GM] serializing map failed: {}", e),
        }
    }
}
