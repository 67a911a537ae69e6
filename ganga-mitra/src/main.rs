//! Ganga Mitra
//!
//! River water-quality dashboard for monitoring points along the Ganga.
//!
//! Data flow:
//! 1. `gm-data` embeds the location, search-index and fact CSVs plus
//!    `app-config.json` at compile time.
//! 2. On mount, `App` parses them into the shared `AppState`.
//! 3. The dashboard pages draw a fresh synthetic 15-day window, merge today's
//!    values onto every location and hand the result to the D3 chart and the
//!    Leaflet map.

mod pages;

use dioxus::prelude::*;
use gm_data::config::AppConfig;
use gm_data::Registry;
use gm_ui::components::{ErrorDisplay, LoadingSpinner};
use gm_ui::js_bridge;
use gm_ui::state::AppState;
use pages::{Alert, Home, Landing, NotFound, Search, Settings};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/Search")]
    Search {},
    #[route("/Home")]
    Home {},
    #[route("/Settings")]
    Settings {},
    #[route("/Alert")]
    Alert {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    let root_name = match AppConfig::bundled() {
        Ok(config) => config.root_name,
        Err(e) => {
            log::error!("[GM] {:#}", e);
            AppConfig::default().root_name
        }
    };
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(root_name))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load reference data on mount
    use_effect(move || {
        match AppConfig::bundled() {
            Ok(config) => state.config.set(config),
            Err(e) => log::warn!("[GM] using default config: {:#}", e),
        }

        match Registry::bundled() {
            Ok(registry) => {
                log::info!(
                    "[GM] registry ready: {} locations, {} search names, {} facts",
                    registry.locations().len(),
                    registry.search_index().len(),
                    registry.facts().len()
                );
                state.registry.set(Some(registry));
            }
            Err(e) => {
                log::error!("[GM] failed to load reference data: {:#}", e);
                state
                    .error_msg
                    .set(Some(format!("Failed to load reference data: {:#}", e)));
            }
        }

        js_bridge::init_widgets();
        state.loading.set(false);
    });

    rsx! {
        div {
            style: "font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; min-height: 100vh;",
            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner { message: "Starting Ganga Mitra...".to_string() }
            } else {
                Router::<Route> {}
            }
        }
    }
}
