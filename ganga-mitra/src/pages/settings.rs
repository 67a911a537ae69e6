//! Settings: the persisted location and the active configuration.

use super::NavBar;
use dioxus::prelude::*;
use gm_ui::components::{LocationCard, SectionHeader};
use gm_ui::state::AppState;

#[component]
pub fn Settings() -> Element {
    let mut state = use_context::<AppState>();
    // Bumped after a storage write so the stored value is read again.
    let mut revision = use_signal(|| 0u32);
    let stored = use_memo(move || {
        revision();
        state.store().load()
    });
    let storage_key = state.store().key().to_string();
    let config = state.config.read().clone();
    let rows = vec![
        ("Loading screen", format!("{} ms", config.loading_delay_ms)),
        ("Fact rotation", format!("every {} ms", config.fact_interval_ms)),
        ("Fact fade", format!("{} ms", config.fact_fade_ms)),
        (
            "Map center",
            format!(
                "{:.2}° N, {:.2}° E",
                config.map.center_latitude, config.map.center_longitude
            ),
        ),
        ("Map zoom", config.map.zoom.to_string()),
    ];

    rsx! {
        NavBar {}
        div {
            style: "max-width: 720px; margin: 0 auto; padding: 16px;",

            SectionHeader {
                title: "Saved Location".to_string(),
                subtitle: format!("Stored in this browser under \"{}\"", storage_key),
            }
            div {
                style: "display: flex; align-items: center; justify-content: space-between; padding: 12px 16px; background: #fff; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.15); margin-bottom: 16px;",
                {match stored() {
                    Some(name) => rsx! { span { style: "font-weight: 600;", "{name}" } },
                    None => rsx! { span { style: "color: #6B7280;", "Nothing saved yet" } },
                }}
                button {
                    r#type: "button",
                    style: "padding: 6px 14px; border-radius: 6px; border: 1px solid #B91C1C; background: #fff; color: #B91C1C; cursor: pointer;",
                    onclick: move |_| {
                        state.clear_location();
                        revision += 1;
                    },
                    "Clear"
                }
            }
            LocationCard {
                on_select: move |_| revision += 1,
            }

            div {
                style: "margin-top: 24px;",
                SectionHeader { title: "Configuration".to_string() }
                table {
                    style: "width: 100%; border-collapse: collapse; background: #fff; font-size: 14px;",
                    tbody {
                        for (label, value) in rows {
                            tr {
                                key: "{label}",
                                style: "border-bottom: 1px solid #E5E7EB;",
                                td { style: "padding: 8px 12px; color: #374151;", "{label}" }
                                td { style: "padding: 8px 12px; text-align: right; font-family: monospace;", "{value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
