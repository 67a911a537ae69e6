//! Dashboard: forecast list, trend chart and risk map for the chosen location.

use super::NavBar;
use crate::Route;
use dioxus::prelude::*;
use gm_core::merge::{RiskLevel, RISK_BOD_LIMIT, RISK_PH_LIMIT};
use gm_core::render::{markers, MarkerRenderer, SeriesRenderer};
use gm_core::store::DashboardAction;
use gm_ui::components::{
    ForecastList, LocationCard, ParameterSelector, SectionHeader, WidgetContainer,
};
use gm_ui::hooks::{use_daily_window, Refresh};
use gm_ui::js_bridge;
use gm_ui::state::AppState;
use gm_ui::widgets::{D3TrendChart, LeafletRiverMap};

/// DOM ids the widgets render into.
const CHART_ID: &str = "gm-trend-chart";
const MAP_ID: &str = "gm-river-map";

#[component]
pub fn Home() -> Element {
    let mut state = use_context::<AppState>();
    let mut show_card = use_signal(|| false);

    use_daily_window(Refresh::OnMount);

    // Arriving without a selection: restore the persisted one.
    use_effect(move || {
        if state.dashboard.peek().location.is_some() {
            return;
        }
        if let Some(saved) = state.store().load() {
            log::info!("[GM] restored location {}", saved);
            state.dispatch(DashboardAction::SelectLocation(saved));
        }
    });

    let map_markers = use_memo(move || {
        let locations = state.locations();
        markers(&state.dashboard.read().merged_locations(&locations))
    });

    // Redraw the series and threshold whenever the window or parameter changes
    use_effect(move || {
        if let Some(chart) = state.dashboard.read().trend_chart() {
            D3TrendChart::new(CHART_ID).render_series(&chart);
        }
    });

    use_effect(move || {
        let view = state.config.read().map;
        LeafletRiverMap::new(MAP_ID).render_markers(&view, &map_markers.read());
    });

    use_drop(move || {
        LeafletRiverMap::new(MAP_ID).destroy();
        js_bridge::destroy_trend_chart(CHART_ID);
    });

    let location = state.current_location();
    let waiting = state.dashboard.read().window.is_none();
    let high_risk = map_markers
        .read()
        .iter()
        .filter(|m| m.risk == RiskLevel::High)
        .count();

    rsx! {
        NavBar {}
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 16px; background: #F8FAFC;",

            {match location {
                Some(name) => rsx! {
                    div {
                        style: "display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 12px; margin-bottom: 16px;",
                        div {
                            h1 {
                                style: "margin: 0; font-size: 28px; color: #1E3A8A;",
                                "📍 {name}"
                            }
                            p {
                                style: "margin: 4px 0 0 0; color: #555;",
                                "15-day water quality window: 10 days back, today, 4 days ahead"
                            }
                        }
                        button {
                            r#type: "button",
                            style: "padding: 8px 16px; border-radius: 6px; border: 1px solid #1E3A8A; background: #fff; color: #1E3A8A; cursor: pointer;",
                            onclick: move |_| show_card.toggle(),
                            "Change Location"
                        }
                    }
                },
                None => rsx! {
                    div {
                        style: "margin-bottom: 16px; padding: 12px 16px; background: #FEF3C7; border: 1px solid #F59E0B; border-radius: 6px;",
                        "No location selected. "
                        Link { to: Route::Landing {}, "Search for one" }
                        " or "
                        button {
                            r#type: "button",
                            style: "border: none; background: transparent; color: #1E3A8A; text-decoration: underline; cursor: pointer; padding: 0;",
                            onclick: move |_| show_card.set(true),
                            "pick from the list"
                        }
                        "."
                    }
                },
            }}

            if show_card() {
                div {
                    style: "margin-bottom: 16px;",
                    LocationCard {
                        on_select: move |_| show_card.set(false),
                        on_close: move |_| show_card.set(false),
                    }
                }
            }

            div {
                style: "display: grid; grid-template-columns: minmax(260px, 1fr) 2fr; gap: 16px; align-items: start;",
                div {
                    SectionHeader {
                        title: "Water Quality Parameters".to_string(),
                    }
                    ParameterSelector {}
                    div {
                        style: "margin-top: 16px;",
                        SectionHeader {
                            title: "Forecast".to_string(),
                            subtitle: "Today is highlighted".to_string(),
                        }
                        ForecastList {}
                    }
                }
                div {
                    style: "background: #fff; border-radius: 12px; padding: 16px; box-shadow: 0 1px 3px rgba(0,0,0,0.15);",
                    WidgetContainer {
                        id: CHART_ID.to_string(),
                        waiting: waiting,
                        min_height: 360,
                    }
                }
            }

            div {
                style: "margin-top: 24px;",
                SectionHeader {
                    title: "River Risk Map".to_string(),
                    subtitle: format!("{} of {} locations at high risk today", high_risk, map_markers.read().len()),
                }
                RiskLegend {}
                WidgetContainer {
                    id: MAP_ID.to_string(),
                    waiting: waiting,
                    height: 480,
                    min_height: 480,
                    border: "2px solid black".to_string(),
                }
            }
        }
    }
}

#[component]
fn RiskLegend() -> Element {
    let entries = [
        (
            RiskLevel::High,
            format!("High risk (pH > {} or BOD > {})", RISK_PH_LIMIT, RISK_BOD_LIMIT),
        ),
        (RiskLevel::Low, "Low risk".to_string()),
    ]
    .map(|(level, label)| (level.color(), label));

    rsx! {
        div {
            style: "display: flex; gap: 20px; margin: 8px 0; font-size: 13px;",
            for (color, label) in entries {
                span {
                    key: "{label}",
                    style: "display: flex; align-items: center; gap: 6px;",
                    span {
                        style: "display: inline-block; width: 12px; height: 12px; border-radius: 50%; border: 1px solid black; background: {color};",
                    }
                    "{label}"
                }
            }
        }
    }
}
