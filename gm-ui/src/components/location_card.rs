//! Card with a dropdown for choosing a monitoring location.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LocationCardProps {
    /// Fired with the chosen name after it has been stored
    pub on_select: Option<EventHandler<String>>,
    pub on_close: Option<EventHandler<()>>,
}

/// Location dropdown.
/// Reads locations from AppState; a choice updates the selection and local storage.
#[component]
pub fn LocationCard(props: LocationCardProps) -> Element {
    let mut state = use_context::<AppState>();
    let locations = state.locations();
    let selected = state.dashboard.read().location.clone().unwrap_or_default();
    let on_select = props.on_select;

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        if value.is_empty() {
            return;
        }
        state.select_location(&value);
        if let Some(handler) = on_select {
            handler.call(value);
        }
    };

    rsx! {
        div {
            style: "max-width: 360px; border-radius: 8px; padding: 16px; background: #fff; box-shadow: 0 4px 12px rgba(0,0,0,0.2); position: relative;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                h2 {
                    style: "margin: 0; font-size: 20px; font-weight: bold;",
                    "Select Location"
                }
                if let Some(on_close) = props.on_close {
                    button {
                        r#type: "button",
                        title: "Close",
                        style: "border: none; background: transparent; color: #6B7280; cursor: pointer; font-size: 16px;",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
            }
            select {
                style: "display: block; width: 100%; padding: 8px; border: 1px solid #D1D5DB; border-radius: 6px;",
                onchange: on_change,
                option { value: "", selected: selected.is_empty(), "Select a location" }
                for location in locations.iter() {
                    option {
                        key: "{location.id}",
                        value: "{location.name}",
                        selected: location.name == selected,
                        "{location.name}"
                    }
                }
            }
        }
    }
}
