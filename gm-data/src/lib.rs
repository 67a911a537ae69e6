//! Embedded reference data for the Ganga Mitra dashboard.
//!
//! The CSV fixtures under `fixtures/` are compiled into the binary with
//! `include_str!` and parsed once at startup into a [`Registry`]; nothing is
//! written back.
//!
//! # CSV Formats
//!
//! - **Locations**: `ID,NAME,LATITUDE,LONGITUDE`
//! - **Search index**: `ID,NAME`
//! - **Facts**: `ID,FACT`
//!
//! All three have a header row.
//!
//! # Example
//!
//! ```rust
//! use gm_data::Registry;
//!
//! let registry = Registry::bundled().unwrap();
//! assert!(registry.locations().iter().any(|l| l.name == "Varanasi"));
//! assert!(!registry.facts().is_empty());
//! ```

pub mod config;
mod loader;
pub mod models;

use gm_core::record::Location;
use models::Fact;

/// Monitoring locations with coordinates.
pub static LOCATIONS_CSV: &str = include_str!("../../fixtures/locations.csv");

/// Names offered by the landing page autocomplete.
pub static SEARCH_INDEX_CSV: &str = include_str!("../../fixtures/search-index.csv");

/// "Did you know?" facts.
pub static FACTS_CSV: &str = include_str!("../../fixtures/facts.csv");

/// Static reference data, read-only after loading.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Registry {
    locations: Vec<Location>,
    search_index: Vec<String>,
    facts: Vec<Fact>,
}

impl Registry {
    /// An empty registry; use the `load_*` methods to populate it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all three CSV documents.
    pub fn from_csv(locations: &str, search_index: &str, facts: &str) -> anyhow::Result<Self> {
        let mut registry = Registry::new();
        registry.load_locations(locations)?;
        registry.load_search_index(search_index)?;
        registry.load_facts(facts)?;
        Ok(registry)
    }

    /// The fixtures compiled into this crate.
    pub fn bundled() -> anyhow::Result<Self> {
        Registry::from_csv(LOCATIONS_CSV, SEARCH_INDEX_CSV, FACTS_CSV)
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn search_index(&self) -> &[String] {
        &self.search_index
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    pub fn fact_text(&self, index: usize) -> Option<&str> {
        self.facts.get(index).map(|f| f.text.as_str())
    }

    pub fn location_by_name(&self, name: &str) -> Option<&Location> {
        self.locations
            .iter()
            .find(|l| l.name.eq_ignore_ascii_case(name.trim()))
    }
}
