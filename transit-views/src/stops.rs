//! Busiest stops and transfer points: a marker map plus a table.

use crate::controller::QueryView;
use crate::map::{GeoItem, MapCommand, MapState, MarkerLayer};
use crate::table::{Cell, Column, Table};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use transit_core::format::escape_html;
use transit_core::geo::{Bounds, LatLng};
use transit_core::params::{Endpoint, QueryParams};
use transit_core::schema::{BusiestStop, StopsResponse, TransferPoint};

/// A geolocated stop row from one of the stop endpoints.
pub trait StopItem: GeoItem + DeserializeOwned {
    const ENDPOINT: Endpoint;

    fn columns() -> Vec<Column>;
    fn cells(&self) -> Vec<Cell>;
}

fn count_cell(n: u64) -> Cell {
    Cell::numeric(n.to_string(), n as f64)
}

impl GeoItem for BusiestStop {
    fn position(&self) -> Option<LatLng> {
        BusiestStop::position(self)
    }

    fn metric(&self) -> f64 {
        self.total_trip_events as f64
    }

    fn tooltip(&self) -> String {
        format!(
            "<b>{}</b><br/>Stop code: {}<br/>Trip events: {}<br/>Unique routes: {}",
            escape_html(&self.stop_name),
            escape_html(self.stop_code.as_deref().unwrap_or("")),
            self.total_trip_events,
            self.num_unique_routes
        )
    }
}

impl StopItem for BusiestStop {
    const ENDPOINT: Endpoint = Endpoint::BusiestStops;

    fn columns() -> Vec<Column> {
        vec![
            Column::plain("Stop"),
            Column::plain("Code"),
            Column::plain("Trip events"),
            Column::plain("Unique routes"),
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(self.stop_name.clone()),
            Cell::text(self.stop_code.clone().unwrap_or_default()),
            count_cell(self.total_trip_events),
            count_cell(self.num_unique_routes),
        ]
    }
}

impl GeoItem for TransferPoint {
    fn position(&self) -> Option<LatLng> {
        TransferPoint::position(self)
    }

    fn metric(&self) -> f64 {
        self.num_unique_routes as f64
    }

    fn tooltip(&self) -> String {
        format!(
            "<b>{}</b><br/>Stop code: {}<br/>Unique routes: {}",
            escape_html(&self.stop_name),
            escape_html(self.stop_code.as_deref().unwrap_or("")),
            self.num_unique_routes
        )
    }
}

impl StopItem for TransferPoint {
    const ENDPOINT: Endpoint = Endpoint::TransferPoints;

    fn columns() -> Vec<Column> {
        vec![
            Column::plain("Stop"),
            Column::plain("Code"),
            Column::plain("Unique routes"),
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(self.stop_name.clone()),
            Cell::text(self.stop_code.clone().unwrap_or_default()),
            count_cell(self.num_unique_routes),
        ]
    }
}

/// Map commands and table for one stops result.
#[derive(Debug, Clone, PartialEq)]
pub struct StopsOutput {
    pub map: Vec<MapCommand>,
    pub table: Table,
}

/// A stops view owns its map state; the table is rebuilt on every render.
#[derive(Debug)]
pub struct StopsView<T> {
    map: MapState,
    _items: PhantomData<fn() -> T>,
}

pub type BusiestStopsView = StopsView<BusiestStop>;
pub type TransferPointsView = StopsView<TransferPoint>;

impl<T: StopItem> StopsView<T> {
    pub fn new() -> Self {
        Self {
            map: MapState::default(),
            _items: PhantomData,
        }
    }

    /// Recompute the map size and refit the last bounds.
    pub fn invalidate(&self) -> Vec<MapCommand> {
        self.map.invalidate()
    }

    pub fn last_bounds(&self) -> Option<Bounds> {
        self.map.last_bounds()
    }
}

impl<T: StopItem> Default for StopsView<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StopItem> QueryView for StopsView<T> {
    type Response = StopsResponse<T>;
    type Output = StopsOutput;

    const ENDPOINT: Endpoint = T::ENDPOINT;

    fn render(&mut self, _params: &QueryParams, response: Self::Response) -> StopsOutput {
        let map = self.map.render(MarkerLayer::build(&response.items));
        let mut table = Table::new(T::columns());
        for item in &response.items {
            table.push_row(item.cells());
        }
        StopsOutput { map, table }
    }
}
