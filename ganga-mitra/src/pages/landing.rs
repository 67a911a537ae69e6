//! Landing page: timed loading screen, then search with rotating facts.

use crate::Route;
use dioxus::prelude::*;
use gm_core::landing::{LandingAction, LandingState};
use gm_ui::components::{FactPanel, LoadingSpinner, SearchBox};
use gm_ui::js_bridge;
use gm_ui::state::AppState;
use gm_ui::timer::{use_interval, use_timeout, use_timer_slot};

/// `/Search` shows the same page as `/`.
#[component]
pub fn Search() -> Element {
    rsx! { Landing {} }
}

#[component]
pub fn Landing() -> Element {
    let mut state = use_context::<AppState>();
    let nav = navigator();
    let config = state.config.read().clone();
    let fact_count = state
        .registry
        .peek()
        .as_ref()
        .map(|r| r.facts().len())
        .unwrap_or(0);
    let mut landing = use_signal(move || LandingState::new(fact_count));

    let mut dispatch = move |action: LandingAction| {
        let registry = state.registry.peek();
        let names = registry.as_ref().map(|r| r.search_index()).unwrap_or_default();
        let next = landing.peek().reduce(action, names);
        landing.set(next);
    };

    use_timeout(config.loading_delay_ms, move || {
        dispatch(LandingAction::LoadingElapsed)
    });

    // Each tick fades the fact out; the slot swaps it once the fade ends.
    let fade = use_timer_slot();
    let fade_ms = config.fact_fade_ms;
    use_interval(config.fact_interval_ms, move || {
        dispatch(LandingAction::FactTick);
        fade.schedule(fade_ms, move || dispatch(LandingAction::FactFaded));
    });

    let mut submit = move || match landing.peek().submit() {
        Ok(location) => {
            let known = state
                .registry
                .peek()
                .as_ref()
                .is_some_and(|r| r.location_by_name(&location).is_some());
            if known {
                log::info!("[GM] forecast requested for {}", location);
            } else {
                log::info!("[GM] forecast requested for {} (not a monitoring point)", location);
            }
            state.select_location(&location);
            nav.push(Route::Home {});
        }
        Err(e) => js_bridge::alert(&e.to_string()),
    };

    let current = landing.read().clone();
    if !current.is_ready() {
        return rsx! { LoadingSpinner {} };
    }

    let fact = current
        .facts
        .index()
        .and_then(|i| {
            state
                .registry
                .read()
                .as_ref()
                .and_then(|r| r.fact_text(i).map(str::to_string))
        })
        .unwrap_or_default();

    rsx! {
        div {
            style: "position: relative; min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 24px; box-sizing: border-box; background: linear-gradient(160deg, #0B3D91 0%, #1E6FB8 45%, #6CB4E4 100%); color: #fff;",
            h1 {
                class: "gm-fade-in",
                style: "margin: 0 0 8px 0; font-size: 56px; font-weight: 800; letter-spacing: 0.02em; animation-delay: 0.2s;",
                "Ganga Mitra"
            }
            p {
                class: "gm-fade-in",
                style: "margin: 0 0 32px 0; font-size: 20px; animation-delay: 0.4s;",
                "Your daily guide to the health of the holy river"
            }
            div {
                class: "gm-fade-in",
                style: "animation-delay: 0.6s;",
                SearchBox {
                    query: current.query.clone(),
                    suggestions: current.suggestions.clone(),
                    on_input: move |query: String| dispatch(LandingAction::QueryChanged(query)),
                    on_pick: move |name: String| dispatch(LandingAction::SuggestionPicked(name)),
                    on_clear: move |_| dispatch(LandingAction::ClearQuery),
                    on_confirm: move |_| submit(),
                }
            }
            if !fact.is_empty() {
                FactPanel {
                    fact: fact.clone(),
                    visible: current.facts.is_visible(),
                    fade_ms: fade_ms,
                }
            }
            button {
                class: "gm-fade-in",
                r#type: "button",
                style: "margin-top: 36px; padding: 14px 36px; font-size: 18px; font-weight: bold; color: #0B3D91; background: #FDE68A; border: none; border-radius: 999px; cursor: pointer; box-shadow: 0 4px 12px rgba(0,0,0,0.25); animation-delay: 1.0s;",
                onclick: move |_| submit(),
                "Get Your Forecast"
            }
        }
    }
}
