//! Full-screen loading indicator shown while the landing page warms up.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner(#[props(default = "Loading river data...".to_string())] message: String) -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: column; justify-content: center; align-items: center; height: 100vh; background: #000; color: #9CC9FF; gap: 16px;",
            div { class: "gm-spinner" }
            p {
                style: "margin: 0; font-size: 14px; letter-spacing: 0.05em;",
                "{message}"
            }
        }
    }
}
