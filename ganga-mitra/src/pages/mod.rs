//! One module per route.

mod alert;
mod home;
mod landing;
mod not_found;
mod settings;

pub use alert::Alert;
pub use home::Home;
pub use landing::{Landing, Search};
pub use not_found::NotFound;
pub use settings::Settings;

use crate::Route;
use dioxus::prelude::*;

/// Link bar shared by the dashboard pages.
#[component]
fn NavBar() -> Element {
    let link_style = "color: #1E3A8A; text-decoration: none; font-weight: 600;";
    rsx! {
        nav {
            style: "display: flex; gap: 20px; justify-content: center; padding: 12px 16px; background: #EFF6FF; border-bottom: 1px solid #BFDBFE;",
            Link { to: Route::Landing {}, style: link_style, "Search" }
            Link { to: Route::Home {}, style: link_style, "Dashboard" }
            Link { to: Route::Alert {}, style: link_style, "Alerts" }
            Link { to: Route::Settings {}, style: link_style, "Settings" }
        }
    }
}
