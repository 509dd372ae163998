//! View models for the four transit query views.
//!
//! Everything here is platform independent: a view turns a decoded API
//! response into a description of what to draw (table rows, chart specs,
//! map commands). The browser bridge and the CLI only execute or print
//! those descriptions.
//!
//! # Views
//!
//! - [`stops::BusiestStopsView`] and [`stops::TransferPointsView`]: map and table
//! - [`trip_speed::TripSpeedView`]: overall banner, table and duration/speed charts
//! - [`hourly_frequency::HourlyFrequencyView`]: table or one chart per route
//!
//! Each view owns its private state (last fitted bounds, live chart ids)
//! and is driven by [`controller::load`].

pub mod chart;
pub mod controller;
pub mod hourly_frequency;
pub mod map;
pub mod mode;
pub mod stops;
pub mod table;
pub mod trip_speed;

pub use controller::{load, QueryView};
