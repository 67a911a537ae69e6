//! Scrollable list of per-day values for the selected parameter.

use crate::state::AppState;
use dioxus::prelude::*;

fn date_style(is_today: bool) -> &'static str {
    if is_today {
        "color: #B91C1C; font-weight: bold;"
    } else {
        "color: #EF4444;"
    }
}

#[component]
pub fn ForecastList() -> Element {
    let state = use_context::<AppState>();
    let rows = state.dashboard.read().forecast_rows();

    rsx! {
        div {
            class: "forecast-list",
            style: "margin-top: 8px; background: #fff; border-radius: 12px; padding: 16px; box-shadow: 0 1px 3px rgba(0,0,0,0.15); overflow-y: auto; max-height: 208px;",
            if rows.is_empty() {
                p { "No data available" }
            } else {
                for row in rows {
                    div {
                        key: "{row.label}",
                        style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                        span {
                            style: date_style(row.is_today),
                            "{row.label}"
                        }
                        span {
                            style: "color: #000; font-weight: 600;",
                            "💧 {row.value}"
                        }
                    }
                }
            }
        }
    }
}
