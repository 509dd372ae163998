//! Shared Dioxus components and JS bridge for the transit dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet map and Chart.js helpers via `js_sys::eval()`
//! - `api`: `fetch` of the query endpoints against the page origin
//! - `state`: per-view reactive form state and the load runner
//! - `components`: reusable RSX components (forms, tables, tabs, banners)

pub mod api;
pub mod components;
pub mod js_bridge;
pub mod state;
