//! Hourly frequency tab: per-route hourly charts or list.

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use transit_core::params::Endpoint;
use transit_dashboard_ui::components::{
    DataTable, ErrorDisplay, LoadingSpinner, PanelContainer, QueryForm, ViewHeader,
};
use transit_dashboard_ui::js_bridge;
use transit_dashboard_ui::state::{spawn_load, QueryState};
use transit_views::hourly_frequency::{HourlyFrequencyOutput, HourlyFrequencyView};
use transit_views::table::Table;

const CHARTS_ID: &str = "q4-charts";

fn show(mut table: Signal<Table>, output: HourlyFrequencyOutput) {
    table.set(output.table);
    js_bridge::render_charts(CHARTS_ID, &output.charts);
}

#[component]
pub fn HourlyFrequencyTab() -> Element {
    let state = use_hook(QueryState::new);
    let table = use_signal(Table::default);
    let view = use_hook(|| Rc::new(RefCell::new(HourlyFrequencyView::new())));

    let run = move || {
        spawn_load(view.clone(), state, move |output| show(table, output));
    };

    // Initial query on mount
    use_effect({
        let run = run.clone();
        move || run()
    });

    let endpoint = Endpoint::HourlyFrequency;
    rsx! {
        section {
            ViewHeader {
                title: endpoint.title().to_string(),
                description: "Trips per hour of the day for each route, busiest routes first.".to_string(),
            }
            QueryForm {
                id: format!("form-{}", endpoint.key()),
                state,
                on_submit: move |_: ()| run(),
            }
            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }
            if state.is_loading() {
                LoadingSpinner {}
            }
            PanelContainer { id: CHARTS_ID.to_string() }
            DataTable { id: format!("table-{}", endpoint.key()), table }
        }
    }
}
