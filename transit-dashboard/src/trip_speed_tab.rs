//! Trip duration & speed tab: overall banner, duration/speed charts, table.

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use transit_core::params::Endpoint;
use transit_dashboard_ui::components::{
    DataTable, ErrorDisplay, InfoBanner, LoadingSpinner, PanelContainer, QueryForm, ViewHeader,
};
use transit_dashboard_ui::js_bridge;
use transit_dashboard_ui::state::{spawn_load, QueryState};
use transit_views::table::Table;
use transit_views::trip_speed::{TripSpeedOutput, TripSpeedView};

const CHARTS_ID: &str = "q2-charts";

fn show(mut overall: Signal<Option<String>>, mut table: Signal<Table>, output: TripSpeedOutput) {
    overall.set(output.overall);
    table.set(output.table);
    js_bridge::render_charts(CHARTS_ID, &output.charts);
}

#[component]
pub fn TripSpeedTab() -> Element {
    let state = use_hook(QueryState::new);
    let overall = use_signal(|| None::<String>);
    let table = use_signal(Table::default);
    let view = use_hook(|| Rc::new(RefCell::new(TripSpeedView::new())));

    let run = move || {
        spawn_load(view.clone(), state, move |output| show(overall, table, output));
    };

    // Initial query on mount
    use_effect({
        let run = run.clone();
        move || run()
    });

    let endpoint = Endpoint::TripSpeed;
    rsx! {
        section {
            ViewHeader {
                title: endpoint.title().to_string(),
                description: "Average trip duration and speed per route. Whole week lists combined figures; a single day type with a bounded limit adds charts.".to_string(),
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
            if let Some(message) = overall.read().as_ref() {
                InfoBanner { message: message.clone() }
            }
            PanelContainer { id: CHARTS_ID.to_string() }
            DataTable { id: format!("table-{}", endpoint.key()), table }
        }
    }
}
