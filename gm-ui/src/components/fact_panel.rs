//! "Did You Know?" panel with a fading fact.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct FactPanelProps {
    pub fact: String,
    /// False while the current fact is fading out
    pub visible: bool,
    #[props(default = 500)]
    pub fade_ms: u32,
}

#[component]
pub fn FactPanel(props: FactPanelProps) -> Element {
    let opacity = if props.visible { 1 } else { 0 };
    let transition = format!("opacity {}ms ease-in-out", props.fade_ms);

    rsx! {
        div {
            style: "margin-top: 36px; text-align: center; color: #fff; max-width: 640px; padding: 0 16px;",
            p {
                class: "gm-fade-in",
                style: "font-weight: bold; margin: 0 0 8px 0; animation-delay: 0.7s;",
                "Did You Know?"
            }
            div {
                class: "gm-fade-in",
                style: "animation-delay: 0.8s;",
                p {
                    style: "margin: 0; font-size: 16px; opacity: {opacity}; transition: {transition};",
                    "{props.fact}"
                }
            }
        }
    }
}
