//! Locations currently flagged high-risk, with the readings that tripped the rule.

use super::NavBar;
use crate::Route;
use dioxus::prelude::*;
use gm_core::dates::format_date;
use gm_core::merge::risk_reasons;
use gm_ui::components::SectionHeader;
use gm_ui::hooks::{use_daily_window, Refresh};
use gm_ui::state::AppState;

/// One row of the alert list.
#[derive(Debug, Clone, PartialEq)]
struct AlertRow {
    name: String,
    reasons: String,
}

#[component]
pub fn Alert() -> Element {
    let state = use_context::<AppState>();
    use_daily_window(Refresh::IfMissing);

    let dashboard = state.dashboard.read();
    let date = dashboard
        .today_record()
        .map(|r| format_date(&r.date))
        .unwrap_or_default();
    let reasons = dashboard
        .today_record()
        .map(|r| {
            risk_reasons(r)
                .iter()
                .map(|p| format!("{} {}", p.axis_label(), r.formatted_value(*p)))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();
    let rows = dashboard
        .merged_locations(&state.locations())
        .into_iter()
        .filter(|m| m.risk_flag)
        .map(|m| AlertRow {
            name: m.name,
            reasons: reasons.clone(),
        })
        .collect::<Vec<_>>();

    rsx! {
        NavBar {}
        div {
            style: "max-width: 720px; margin: 0 auto; padding: 16px;",
            SectionHeader {
                title: "Alerts".to_string(),
                subtitle: format!("High-risk locations for {}", date),
            }
            if rows.is_empty() {
                p {
                    style: "padding: 12px 16px; background: #DCFCE7; border-radius: 8px; color: #166534;",
                    "No location is at high risk today."
                }
            } else {
                ul {
                    style: "list-style: none; margin: 0; padding: 0;",
                    for row in rows {
                        li {
                            key: "{row.name}",
                            style: "display: flex; justify-content: space-between; padding: 12px 16px; margin-bottom: 8px; background: #FEE2E2; border-left: 4px solid red; border-radius: 6px;",
                            span { style: "font-weight: 600;", "{row.name}" }
                            span { style: "color: #991B1B;", "{row.reasons}" }
                        }
                    }
                }
            }
            p {
                style: "margin-top: 16px;",
                Link { to: Route::Home {}, "Back to the dashboard" }
            }
        }
    }
}
