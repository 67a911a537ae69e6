//! Rounded section banner used above each dashboard block.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SectionHeaderProps {
    pub title: String,
    /// Smaller line under the title
    #[props(default = String::new())]
    pub subtitle: String,
}

#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        div {
            style: "background: #DBEAFE; border-radius: 24px; padding: 12px 16px; margin-bottom: 8px; text-align: center; box-shadow: 0 1px 3px rgba(0,0,0,0.15);",
            h2 {
                style: "margin: 0; font-size: 18px; font-weight: 600;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    style: "margin: 4px 0 0 0; font-size: 12px; color: #555;",
                    "{props.subtitle}"
                }
            }
        }
    }
}
