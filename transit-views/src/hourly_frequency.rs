//! Trips per hour of the day for each route.

use crate::chart::{BarChartSpec, ChartBatch, ChartRegistry, ValueLabels};
use crate::controller::QueryView;
use crate::mode::RenderMode;
use crate::table::{Cell, Column, Table};
use transit_core::format::{fmt2, route_label};
use transit_core::params::{Endpoint, QueryParams};
use transit_core::schema::{HourlyFrequencyResponse, HourlyRoute};

pub const HOURLY_COLOR: &str = "rgba(99, 132, 255, 0.6)";

#[derive(Debug, Clone, PartialEq)]
pub struct HourlyFrequencyOutput {
    pub table: Table,
    pub charts: ChartBatch,
}

#[derive(Debug, Clone)]
pub struct HourlyFrequencyView {
    charts: ChartRegistry,
}

impl Default for HourlyFrequencyView {
    fn default() -> Self {
        Self::new()
    }
}

/// `"<label> — Total: <n>"`; an unknown total leaves the number blank.
fn route_heading(route: &HourlyRoute) -> String {
    format!(
        "{} — Total: {}",
        route_label(route.route_short_name.as_deref(), &route.route_long_name),
        route
            .total_daily_trips
            .map(|n| n.to_string())
            .unwrap_or_default()
    )
}

/// `h:count` pairs joined by `", "`.
pub fn hourly_profile(route: &HourlyRoute) -> String {
    route
        .hourly
        .iter()
        .map(|h| format!("{}:{}", h.hour, h.trips))
        .collect::<Vec<_>>()
        .join(", ")
}

fn count_cell(n: u64) -> Cell {
    Cell::numeric(n.to_string(), n as f64)
}

fn weekly_table(routes: &[HourlyRoute]) -> Table {
    let mut table = Table::new(vec![
        Column::plain("Route name and number of trips"),
        Column::plain("Weekday"),
        Column::plain("Saturday"),
        Column::plain("Sunday"),
        Column::plain("Average"),
    ]);
    for route in routes {
        let totals = route.totals_by_service.unwrap_or_default();
        table.push_row(vec![
            Cell::text(route_heading(route)),
            count_cell(totals.weekday),
            count_cell(totals.saturday),
            count_cell(totals.sunday),
            Cell::numeric(
                fmt2(route.average_daily_trips),
                route.average_daily_trips.unwrap_or(0.0),
            ),
        ]);
    }
    table
}

fn profile_columns() -> Vec<Column> {
    vec![
        Column::plain("Route name and number of trips"),
        Column::plain("Hourly profile (h:count, …)"),
    ]
}

fn profile_table(routes: &[HourlyRoute]) -> Table {
    let mut table = Table::new(profile_columns());
    for route in routes {
        table.push_row(vec![
            Cell::text(route_heading(route)),
            Cell::text(hourly_profile(route)),
        ]);
    }
    table
}

fn route_chart(route: &HourlyRoute) -> BarChartSpec {
    let labels = route.hourly.iter().map(|h| h.hour.to_string()).collect();
    let values = route.hourly.iter().map(|h| h.trips as f64).collect();
    BarChartSpec::new(route_heading(route), "Trips per hour", HOURLY_COLOR)
        .with_series(labels, values)
        .with_value_labels(ValueLabels::Integer)
}

impl HourlyFrequencyView {
    pub fn new() -> Self {
        Self {
            charts: ChartRegistry::new(Endpoint::HourlyFrequency.key()),
        }
    }
}

impl QueryView for HourlyFrequencyView {
    type Response = HourlyFrequencyResponse;
    type Output = HourlyFrequencyOutput;

    const ENDPOINT: Endpoint = Endpoint::HourlyFrequency;

    fn render(&mut self, params: &QueryParams, response: HourlyFrequencyResponse) -> HourlyFrequencyOutput {
        let mut routes = response.routes;
        routes.sort_by(|a, b| {
            b.total_daily_trips
                .unwrap_or(0)
                .cmp(&a.total_daily_trips.unwrap_or(0))
        });

        let (table, specs) = match RenderMode::select(params) {
            RenderMode::WholeWeek => (weekly_table(&routes), Vec::new()),
            RenderMode::Unbounded => (profile_table(&routes), Vec::new()),
            RenderMode::Charts => (
                Table::new(profile_columns()),
                routes.iter().map(route_chart).collect(),
            ),
        };
        HourlyFrequencyOutput {
            table,
            charts: self.charts.replace(specs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartSize;
    use serde_json::json;
    use transit_core::params::{Limit, ServiceId};

    fn response() -> HourlyFrequencyResponse {
        serde_json::from_value(json!({
            "max_hour": 25,
            "routes": [
                {"route_short_name": "7", "route_long_name": "Bathurst", "service_id": "all",
                 "hourly": [{"hour": 6, "trips": 3}, {"hour": 7, "trips": 5}],
                 "total_daily_trips": 8,
                 "totals_by_service": {"1": 5, "2": 2, "3": 1},
                 "average_daily_trips": 2.6667},
                {"route_short_name": "29", "route_long_name": "Dufferin", "service_id": "all",
                 "hourly": [{"hour": 5, "trips": 4}, {"hour": 6, "trips": 11}, {"hour": 25, "trips": 1}],
                 "total_daily_trips": 16,
                 "totals_by_service": {"1": 10, "2": 6}},
                {"route_long_name": "Shuttle", "hourly": []}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn whole_week_lists_totals_per_day_type() {
        let mut view = HourlyFrequencyView::new();
        let params = QueryParams::new(ServiceId::WholeWeek, Limit::default());
        let output = view.render(&params, response());

        let labels: Vec<&str> = output.table.columns.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Route name and number of trips", "Weekday", "Saturday", "Sunday", "Average"]
        );
        assert_eq!(
            output.table.rows[0].texts(),
            vec!["29 — Dufferin — Total: 16", "10", "6", "0", "0.00"]
        );
        assert_eq!(
            output.table.rows[1].texts(),
            vec!["7 — Bathurst — Total: 8", "5", "2", "1", "2.67"]
        );
        assert_eq!(
            output.table.rows[2].texts(),
            vec!["Shuttle — Total: ", "0", "0", "0", "0.00"]
        );
        assert!(output.charts.create.is_empty());
    }

    #[test]
    fn unbounded_lists_hourly_profiles() {
        let mut view = HourlyFrequencyView::new();
        let output = view.render(&QueryParams::new(ServiceId::Saturday, Limit::All), response());

        assert_eq!(output.table.columns.len(), 2);
        assert_eq!(
            output.table.rows[0].texts(),
            vec!["29 — Dufferin — Total: 16", "5:4, 6:11, 25:1"]
        );
        assert_eq!(output.table.rows[2].texts(), vec!["Shuttle — Total: ", ""]);
        assert!(output.charts.create.is_empty());
    }

    #[test]
    fn bounded_single_service_draws_one_chart_per_route() {
        let mut view = HourlyFrequencyView::new();
        let output = view.render(&QueryParams::default(), response());

        assert!(output.table.is_empty());
        assert_eq!(output.charts.create.len(), 3);
        let busiest = &output.charts.create[0];
        assert_eq!(busiest.title, "29 — Dufferin — Total: 16");
        assert_eq!(busiest.labels, vec!["5", "6", "25"]);
        assert_eq!(busiest.values, vec![4.0, 11.0, 1.0]);
        assert_eq!(busiest.dataset_label, "Trips per hour");
        assert_eq!(busiest.color, HOURLY_COLOR);
        assert_eq!(busiest.value_labels, ValueLabels::Integer);
        assert_eq!(busiest.size, ChartSize::Responsive);
        assert_eq!(busiest.id, "q4-chart-1-0");
    }

    #[test]
    fn switching_to_list_destroys_route_charts() {
        let mut view = HourlyFrequencyView::new();
        let charts = view.render(&QueryParams::default(), response()).charts;
        let ids: Vec<String> = charts.create.iter().map(|c| c.id.clone()).collect();

        let list = view.render(&QueryParams::new(ServiceId::WholeWeek, Limit::All), response());
        assert_eq!(list.charts.destroy, ids);
        assert!(list.charts.create.is_empty());
    }
}
