//! Runtime configuration for the web app.
//!
//! Parsed from `fixtures/app-config.json`; any key left out falls back to
//! the default below.

use anyhow::Context;
use gm_core::render::MapView;
use serde::{Deserialize, Serialize};

/// The configuration compiled into the app.
pub static APP_CONFIG_JSON: &str = include_str!("../../fixtures/app-config.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// DOM element the app mounts into
    pub root_name: String,
    /// Local storage key holding the last selected location
    pub storage_key: String,
    /// How long the landing page shows its loading indicator
    pub loading_delay_ms: u32,
    /// Time between fact rotations
    pub fact_interval_ms: u32,
    /// Fade-out duration before the next fact appears
    pub fact_fade_ms: u32,
    pub map: MapView,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root_name: "ganga-mitra-root".to_string(),
            storage_key: "selectedLocation".to_string(),
            loading_delay_ms: 3000,
            fact_interval_ms: 2000,
            fact_fade_ms: 500,
            map: MapView::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: AppConfig = serde_json::from_str(json).context("parsing app config")?;
        if config.fact_fade_ms >= config.fact_interval_ms {
            log::warn!(
                "[GM] fact fade ({} ms) is not shorter than the rotation interval ({} ms)",
                config.fact_fade_ms,
                config.fact_interval_ms
            );
        }
        Ok(config)
    }

    pub fn bundled() -> anyhow::Result<Self> {
        AppConfig::from_json(APP_CONFIG_JSON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_matches_defaults() {
        assert_eq!(AppConfig::bundled().unwrap(), AppConfig::default());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = AppConfig::from_json(r#"{ "loadingDelayMs": 1200 }"#).unwrap();
        assert_eq!(config.loading_delay_ms, 1200);
        assert_eq!(config.fact_interval_ms, 2000);
        assert_eq!(config.storage_key, "selectedLocation");
        assert_eq!(config.map.zoom, 6);
    }

    #[test]
    fn map_section_is_read() {
        let config = AppConfig::from_json(
            r#"{ "map": { "centerLongitude": 88.36, "centerLatitude": 22.57, "zoom": 9 } }"#,
        )
        .unwrap();
        assert_eq!(config.map.center_longitude, 88.36);
        assert_eq!(config.map.zoom, 9);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = AppConfig::from_json("{ loadingDelayMs: }").unwrap_err();
        assert!(err.to_string().contains("app config"));
    }
}
