//! Core types and logic for the Ganga Mitra river-quality dashboard.
//!
//! - `generator`: fifteen-day synthetic windows from an injectable random source and clock
//! - `merge`: today's readings joined onto each location, with the risk rule
//! - `render`: chart and map view models plus the renderer traits
//! - `store` / `landing`: reducer-style page state
//!
//! ```rust
//! use chrono::NaiveDate;
//! use gm_core::generator::{generate_window, WINDOW_LEN};
//! use gm_core::merge::merge_locations;
//! use gm_core::record::Location;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//! let mut rng = || 0.9;
//! let window = generate_window(&mut rng, today);
//! assert_eq!(window.records().len(), WINDOW_LEN);
//!
//! let patna = Location { id: 1, name: "Patna".into(), latitude: 25.59, longitude: 85.14 };
//! let merged = merge_locations(&[patna], window.today_record().unwrap());
//! assert!(merged[0].risk_flag);
//! ```

pub mod date_range;
pub mod dates;
pub mod generator;
pub mod landing;
pub mod merge;
pub mod parameter;
pub mod record;
pub mod render;
pub mod search;
pub mod store;
