//! Radio group choosing the charted parameter.

use crate::state::AppState;
use dioxus::prelude::*;
use gm_core::parameter::Parameter;
use gm_core::store::DashboardAction;

/// Two-column radio group bound to the dashboard's selected parameter.
#[component]
pub fn ParameterSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = state.dashboard.read().parameter;
    let options = Parameter::ALL
        .into_iter()
        .map(|p| (p.code(), format!("param-{}", p.code()), p.display_label(), p == selected))
        .collect::<Vec<_>>();

    let on_change = move |evt: Event<FormData>| {
        state.dispatch(DashboardAction::SelectParameterCode(Some(evt.value())));
    };

    rsx! {
        div {
            style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px; margin-top: 8px;",
            for (code, dom_id, label, checked) in options {
                label {
                    key: "{code}",
                    r#for: "{dom_id}",
                    style: "display: flex; align-items: center; gap: 6px; margin-left: 24px; font-size: 16px; font-weight: bold; white-space: nowrap; cursor: pointer;",
                    input {
                        id: "{dom_id}",
                        name: "quality",
                        r#type: "radio",
                        value: "{code}",
                        style: "width: 20px; height: 20px;",
                        checked: checked,
                        onchange: on_change,
                    }
                    "{label}"
                }
            }
        }
    }
}
