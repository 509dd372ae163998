//! Average trip duration and speed per route.

use crate::chart::{BarChartSpec, ChartBatch, ChartRegistry, ValueLabels};
use crate::controller::QueryView;
use crate::table::{Cell, Column, Table};
use transit_core::format::{fmt2, route_label, service_label};
use transit_core::params::{Endpoint, QueryParams, ServiceId};
use transit_core::schema::{OverallAverages, ServiceRouteStats, TripSpeedResponse, WeeklyRouteStats};

pub const CHART_HEIGHT: u32 = 320;
pub const DURATION_COLOR: &str = "rgba(54, 162, 235, 0.75)";
pub const SPEED_COLOR: &str = "rgba(255, 99, 132, 0.65)";

/// Sort keys of the three sortable columns.
pub const SORT_TRIPS: &str = "trips";
pub const SORT_DURATION: &str = "duration";
pub const SORT_SPEED: &str = "speed";

/// Banner text, table and chart updates for one trip-speed result.
#[derive(Debug, Clone, PartialEq)]
pub struct TripSpeedOutput {
    pub overall: Option<String>,
    pub table: Table,
    pub charts: ChartBatch,
}

#[derive(Debug, Clone)]
pub struct TripSpeedView {
    charts: ChartRegistry,
}

impl Default for TripSpeedView {
    fn default() -> Self {
        Self::new()
    }
}

pub fn overall_banner(overall: &OverallAverages) -> String {
    format!(
        "Overall averages — Duration: {} min, Speed: {} km/h",
        fmt2(overall.avg_duration_min),
        fmt2(overall.avg_speed_kmh)
    )
}

fn columns() -> Vec<Column> {
    vec![
        Column::plain("Route"),
        Column::plain("Service"),
        Column::sortable("Trips", SORT_TRIPS),
        Column::sortable("Avg duration (min)", SORT_DURATION),
        Column::sortable("Avg speed (km/h)", SORT_SPEED),
    ]
}

fn average_cell(value: Option<f64>) -> Cell {
    Cell::numeric(fmt2(value), value.unwrap_or(0.0))
}

fn weekly_row(route: &WeeklyRouteStats) -> Vec<Cell> {
    let trips = route.global.total_trips;
    vec![
        Cell::text(route_label(route.route_short_name.as_deref(), &route.route_long_name)),
        Cell::text(service_label(ServiceId::WholeWeek.as_str())),
        Cell::numeric(
            trips.map(|n| n.to_string()).unwrap_or_default(),
            trips.unwrap_or(0) as f64,
        ),
        average_cell(route.global.avg_duration_min),
        average_cell(route.global.avg_speed_kmh),
    ]
}

fn service_row(route: &ServiceRouteStats) -> Vec<Cell> {
    vec![
        Cell::text(route_label(route.route_short_name.as_deref(), &route.route_long_name)),
        Cell::text(service_label(route.service_id.as_deref().unwrap_or(""))),
        Cell::numeric(route.total_trips.to_string(), route.total_trips as f64),
        average_cell(route.avg_duration_min),
        average_cell(route.avg_speed_kmh),
    ]
}

fn service_table(routes: &[ServiceRouteStats]) -> Table {
    let mut table = Table::new(columns());
    for route in routes {
        table.push_row(service_row(route));
    }
    table.sort_desc_by(SORT_DURATION);
    table
}

/// Duration and speed charts across every route, in response order.
fn service_charts(routes: &[ServiceRouteStats]) -> Vec<BarChartSpec> {
    let labels: Vec<String> = routes
        .iter()
        .map(|r| route_label(r.route_short_name.as_deref(), &r.route_long_name))
        .collect();
    let durations = routes.iter().map(|r| r.avg_duration_min.unwrap_or(0.0)).collect();
    let speeds = routes.iter().map(|r| r.avg_speed_kmh.unwrap_or(0.0)).collect();

    vec![
        BarChartSpec::new("Average Duration (min)", "Duration (min)", DURATION_COLOR)
            .with_series(labels.clone(), durations)
            .with_y_title("Minutes")
            .with_value_labels(ValueLabels::Fixed2)
            .static_layout(CHART_HEIGHT),
        BarChartSpec::new("Average Speed (km/h)", "Speed (km/h)", SPEED_COLOR)
            .with_series(labels, speeds)
            .with_y_title("km/h")
            .with_value_labels(ValueLabels::Fixed2)
            .static_layout(CHART_HEIGHT),
    ]
}

impl TripSpeedView {
    pub fn new() -> Self {
        Self {
            charts: ChartRegistry::new(Endpoint::TripSpeed.key()),
        }
    }
}

impl QueryView for TripSpeedView {
    type Response = TripSpeedResponse;
    type Output = TripSpeedOutput;

    const ENDPOINT: Endpoint = Endpoint::TripSpeed;

    /// The response's mode tag decides the whole-week layout; the limit
    /// decides between list-only and charts for a single service.
    fn render(&mut self, params: &QueryParams, response: TripSpeedResponse) -> TripSpeedOutput {
        let overall = response.overall().map(overall_banner);
        let (table, specs) = match response {
            TripSpeedResponse::WholeWeek { routes, .. } => {
                let mut table = Table::new(columns());
                for route in &routes {
                    table.push_row(weekly_row(route));
                }
                table.sort_desc_by(SORT_DURATION);
                (table, Vec::new())
            }
            TripSpeedResponse::SingleService { routes, .. } if params.limit.is_unbounded() => {
                (service_table(&routes), Vec::new())
            }
            TripSpeedResponse::SingleService { routes, .. } => {
                (service_table(&routes), service_charts(&routes))
            }
        };
        TripSpeedOutput {
            overall,
            table,
            charts: self.charts.replace(specs),
        }
    }
}
