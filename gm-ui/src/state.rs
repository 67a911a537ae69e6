//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! Dashboard changes go through [`AppState::dispatch`], which swaps in the
//! next immutable snapshot.

use crate::storage::LocalStore;
use dioxus::prelude::*;
use gm_core::record::Location;
use gm_core::store::{DashboardAction, DashboardState};
use gm_data::config::AppConfig;
use gm_data::Registry;

/// Shared state for every page of the app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Reference data (None until loaded)
    pub registry: Signal<Option<Registry>>,
    pub config: Signal<AppConfig>,
    /// Whether startup loading is still running
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Current dashboard snapshot
    pub dashboard: Signal<DashboardState>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            registry: Signal::new(None),
            config: Signal::new(AppConfig::default()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            dashboard: Signal::new(DashboardState::default()),
        }
    }

    /// Replace the dashboard snapshot with `action` applied.
    pub fn dispatch(&mut self, action: DashboardAction) {
        let next = self.dashboard.peek().reduce(action);
        self.dashboard.set(next);
    }

    pub fn store(&self) -> LocalStore {
        LocalStore::new(self.config.peek().storage_key.clone())
    }

    /// Select `name` and persist it.
    pub fn select_location(&mut self, name: &str) {
        self.dispatch(DashboardAction::SelectLocation(name.to_string()));
        match self.dashboard.peek().location.as_deref() {
            Some(selected) => self.store().save(selected),
            None => self.store().clear(),
        }
    }

    pub fn clear_location(&mut self) {
        self.dispatch(DashboardAction::ClearLocation);
        self.store().clear();
    }

    /// The selected location, falling back to the persisted one.
    pub fn current_location(&self) -> Option<String> {
        self.dashboard
            .read()
            .location
            .clone()
            .or_else(|| self.store().load())
    }

    pub fn locations(&self) -> Vec<Location> {
        self.registry
            .read()
            .as_ref()
            .map(|r| r.locations().to_vec())
            .unwrap_or_default()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
