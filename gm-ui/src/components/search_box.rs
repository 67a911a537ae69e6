//! Free-text location search with prefix autocomplete.

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SearchBoxProps {
    pub query: String,
    pub suggestions: Vec<String>,
    /// Fired on every keystroke with the full input text
    pub on_input: EventHandler<String>,
    /// Fired when a suggestion is clicked
    pub on_pick: EventHandler<String>,
    pub on_clear: EventHandler<()>,
    /// Fired when Enter is pressed
    pub on_confirm: EventHandler<()>,
    #[props(default = String::new())]
    pub style: String,
}

#[component]
pub fn SearchBox(props: SearchBoxProps) -> Element {
    let on_input = props.on_input;
    let on_pick = props.on_pick;
    let on_clear = props.on_clear;
    let on_confirm = props.on_confirm;

    rsx! {
        div {
            style: "position: relative; width: min(80vw, 700px); color: #000; {props.style}",
            label {
                r#for: "location-search",
                style: "display: block; font-size: 13px; color: #000; margin-bottom: 4px;",
                "Search input"
            }
            input {
                id: "location-search",
                r#type: "text",
                autocomplete: "off",
                value: "{props.query}",
                placeholder: "e.g. Rishikesh",
                style: "width: 100%; box-sizing: border-box; padding: 14px 44px 14px 14px; font-size: 16px; border: 1px solid #000; border-radius: 4px; background: rgba(255,255,255,0.9);",
                oninput: move |evt: Event<FormData>| on_input.call(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        on_confirm.call(());
                    }
                },
            }
            if !props.query.is_empty() {
                button {
                    r#type: "button",
                    title: "Clear",
                    style: "position: absolute; right: 10px; top: 38px; border: none; background: transparent; font-size: 18px; cursor: pointer;",
                    onclick: move |_| on_clear.call(()),
                    "✕"
                }
            }
            if !props.suggestions.is_empty() {
                ul {
                    role: "listbox",
                    style: "position: absolute; z-index: 30; left: 0; right: 0; margin: 2px 0 0 0; padding: 4px 0; list-style: none; background: #fff; border-radius: 4px; box-shadow: 0 4px 12px rgba(0,0,0,0.25); max-height: 240px; overflow-y: auto;",
                    for name in props.suggestions.iter().cloned() {
                        li {
                            key: "{name}",
                            role: "option",
                            style: "padding: 8px 14px; cursor: pointer;",
                            onclick: {
                                let name = name.clone();
                                move |_| on_pick.call(name.clone())
                            },
                            "{name}"
                        }
                    }
                }
            }
        }
    }
}
