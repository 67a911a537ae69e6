//! Shared Dioxus components and browser bridges for Ganga Mitra.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js and Leaflet widgets via `js_sys::eval()`
//! - `widgets`: the renderer traits from `gm-core` implemented on top of `js_bridge`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `storage`: the persisted location in `localStorage`
//! - `timer`: `setTimeout`/`setInterval` tied to component lifetimes
//! - `hooks`: window generation on page mount
//! - `components`: Reusable RSX components (selectors, containers, etc.)

pub mod components;
pub mod hooks;
pub mod js_bridge;
pub mod state;
pub mod storage;
pub mod timer;
pub mod widgets;
