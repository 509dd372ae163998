//! Transit Query Dashboard
//!
//! Four analytical views over a GTFS feed, each backed by one `/api/qN`
//! endpoint of the backend serving this page:
//!
//! 1. Busiest stops: map and table of stops ranked by trip events.
//! 2. Trip duration & speed: overall averages, table and per-route charts.
//! 3. Transfer points: map and table of stops served by several routes.
//! 4. Hourly frequency: per-route trips per hour.
//!
//! Data flow:
//! 1. On mount every view loads once with its default form values.
//! 2. Submitting a view's form reloads that view only.
//! 3. The response is decoded and turned into a view model by
//!    `transit-views`; tables render through Dioxus, maps and charts through
//!    the Leaflet/Chart.js bridge.
//!
//! All four panels stay mounted and inactive ones are hidden, so switching
//! tabs never refetches. A map tab refits its map when it becomes visible.

mod hourly_frequency_tab;
mod stops_tab;
mod trip_speed_tab;

use dioxus::prelude::*;
use hourly_frequency_tab::HourlyFrequencyTab;
use stops_tab::StopsTab;
use transit_core::params::Endpoint;
use transit_dashboard_ui::components::{TabBar, ViewHeader};
use transit_dashboard_ui::js_bridge;
use trip_speed_tab::TripSpeedTab;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("transit-dashboard-root"))
        .launch(App);
}

fn panel_style(visible: bool) -> &'static str {
    if visible {
        "display: block;"
    } else {
        "display: none;"
    }
}

#[component]
fn App() -> Element {
    let active = use_signal(|| Endpoint::BusiestStops);
    use_hook(js_bridge::init_bridge);
    let current = active();

    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            ViewHeader {
                title: "Transit Query Dashboard".to_string(),
                description: "Stop activity, trip speed, transfers and service frequency from the GTFS feed.".to_string(),
            }

            TabBar { active }

            div {
                style: panel_style(current == Endpoint::BusiestStops),
                StopsTab { endpoint: Endpoint::BusiestStops, active }
            }
            div {
                style: panel_style(current == Endpoint::TripSpeed),
                TripSpeedTab {}
            }
            div {
                style: panel_style(current == Endpoint::TransferPoints),
                StopsTab { endpoint: Endpoint::TransferPoints, active }
            }
            div {
                style: panel_style(current == Endpoint::HourlyFrequency),
                HourlyFrequencyTab {}
            }
        }
    }
}
