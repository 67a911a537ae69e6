//! Full-page notice shown when the reference data or config cannot be used.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    #[props(default = "River data unavailable".to_string())]
    pub title: String,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; min-height: 100vh; padding: 24px; box-sizing: border-box; background: linear-gradient(160deg, #0B3D91 0%, #1E6FB8 100%);",
            div {
                role: "alert",
                style: "max-width: 520px; padding: 24px 28px; background: #fff; border-radius: 12px; border-top: 6px solid #B91C1C; box-shadow: 0 8px 24px rgba(0,0,0,0.3); text-align: center;",
                p { style: "margin: 0; font-size: 36px;", "🌊" }
                h2 {
                    style: "margin: 8px 0; font-size: 22px; color: #1E3A8A;",
                    "{props.title}"
                }
                p {
                    style: "margin: 0 0 16px 0; color: #B91C1C; font-family: monospace; font-size: 13px; word-break: break-word;",
                    "{props.message}"
                }
                a {
                    href: "/",
                    style: "display: inline-block; padding: 8px 20px; border-radius: 999px; background: #1E3A8A; color: #fff; text-decoration: none; font-weight: 600;",
                    "Try again"
                }
            }
        }
    }
}
