//! Core types for the transit query dashboard.
//!
//! This crate provides:
//! - `params`: service selector, result limit and the endpoint catalogue
//! - `schema`: typed responses for the four query endpoints
//! - `color` / `geo`: marker color scale and bounding boxes
//! - `format`: shared label and number formatting
//! - `api` (feature `api`): a native `reqwest` client for the query endpoints

#[cfg(feature = "api")]
pub mod api;
pub mod color;
pub mod error;
pub mod format;
pub mod geo;
pub mod params;
pub mod schema;

pub use error::{Result, TransitError};
