use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    log::warn!("[GM] no route for /{}", path);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; height: 100vh; gap: 12px;",
            h1 { style: "margin: 0;", "Page not found" }
            p { style: "margin: 0; color: #555;", "Nothing lives at /{path}." }
            Link { to: Route::Landing {}, "Back to search" }
        }
    }
}
