//! Container div that a JS widget renders into.

use dioxus::prelude::*;

/// Props for WidgetContainer
#[derive(Props, Clone, PartialEq)]
pub struct WidgetContainerProps {
    /// The DOM id the widget renders into
    pub id: String,
    /// Placeholder shown until there is data to draw
    #[props(default = false)]
    pub waiting: bool,
    /// Fixed height in pixels; Leaflet needs one, D3 grows to fit
    pub height: Option<u32>,
    #[props(default = 300)]
    pub min_height: u32,
    #[props(default = String::new())]
    pub border: String,
}

/// A container div for the D3 chart or the Leaflet map.
#[component]
pub fn WidgetContainer(props: WidgetContainerProps) -> Element {
    let height = props
        .height
        .map(|h| format!("height: {}px;", h))
        .unwrap_or_default();
    let border = if props.border.is_empty() {
        String::new()
    } else {
        format!("border: {};", props.border)
    };
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.waiting {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Waiting for data..."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%; {height} {border}",
            }
        }
    }
}
