//! Hooks shared by the dashboard pages.

use crate::state::AppState;
use dioxus::prelude::*;
use gm_core::generator::{DailyWindow, SystemClock};
use gm_core::store::DashboardAction;

/// When a page regenerates the synthetic window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Always draw a fresh window when the page mounts.
    OnMount,
    /// Reuse the current window; generate only if there is none.
    IfMissing,
}

/// `Math.random()` as a [`gm_core::generator::RandomSource`].
pub fn browser_random() -> impl FnMut() -> f64 {
    js_sys::Math::random
}

/// Ensure the dashboard holds a generated window after mount.
pub fn use_daily_window(refresh: Refresh) {
    let mut state = use_context::<AppState>();
    use_effect(move || {
        let missing = state.dashboard.peek().window.is_none();
        if refresh == Refresh::OnMount || missing {
            let mut rng = browser_random();
            let window = DailyWindow::generate(&mut rng, &SystemClock);
            log::info!(
                "[GM] generated {} records for {}",
                window.records().len(),
                window.today()
            );
            state.dispatch(DashboardAction::WindowGenerated(window));
        }
    });
}
