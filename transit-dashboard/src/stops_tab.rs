//! Busiest stops and transfer points tabs: form, map and table.

use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use transit_core::params::Endpoint;
use transit_dashboard_ui::components::{
    DataTable, ErrorDisplay, LoadingSpinner, PanelContainer, QueryForm, ViewHeader,
};
use transit_dashboard_ui::js_bridge;
use transit_dashboard_ui::state::{spawn_load, QueryState};
use transit_views::map::{MapCommand, MapConfig};
use transit_views::stops::{BusiestStopsView, StopsOutput, TransferPointsView};
use transit_views::table::Table;

const MAP_HEIGHT: u32 = 480;

/// The stops view behind a tab. Both kinds render the same output.
#[derive(Clone)]
enum StopsHandle {
    Busiest(Rc<RefCell<BusiestStopsView>>),
    Transfer(Rc<RefCell<TransferPointsView>>),
}

impl StopsHandle {
    fn new(endpoint: Endpoint) -> Self {
        match endpoint {
            Endpoint::TransferPoints => {
                StopsHandle::Transfer(Rc::new(RefCell::new(TransferPointsView::new())))
            }
            _ => StopsHandle::Busiest(Rc::new(RefCell::new(BusiestStopsView::new()))),
        }
    }

    fn load(&self, state: QueryState, map_id: String, table: Signal<Table>) {
        let apply = move |output: StopsOutput| show(&map_id, table, output);
        match self {
            StopsHandle::Busiest(view) => spawn_load(view.clone(), state, apply),
            StopsHandle::Transfer(view) => spawn_load(view.clone(), state, apply),
        }
    }

    fn invalidate(&self) -> Vec<MapCommand> {
        match self {
            StopsHandle::Busiest(view) => view.borrow().invalidate(),
            StopsHandle::Transfer(view) => view.borrow().invalidate(),
        }
    }
}

fn show(map_id: &str, mut table: Signal<Table>, output: StopsOutput) {
    js_bridge::apply_map_commands(map_id, &output.map);
    table.set(output.table);
}

fn description(endpoint: Endpoint) -> &'static str {
    match endpoint {
        Endpoint::TransferPoints => {
            "Stops served by at least two routes. Marker color runs green to red with the number of routes."
        }
        _ => "Stops ranked by trip events. Marker color runs green to red with activity.",
    }
}

#[component]
pub fn StopsTab(endpoint: Endpoint, active: Signal<Endpoint>) -> Element {
    let state = use_hook(QueryState::new);
    let table = use_signal(Table::default);
    let handle = use_hook(|| StopsHandle::new(endpoint));
    let map_id = format!("{}-map", endpoint.key());

    // ─── Effect 1: create the map and run the initial query once on mount ───
    use_effect({
        let handle = handle.clone();
        let map_id = map_id.clone();
        move || {
            js_bridge::init_map(&map_id, &MapConfig::default());
            handle.load(state, map_id.clone(), table);
        }
    });

    // ─── Effect 2: refit the map whenever this tab becomes visible ───
    use_effect({
        let handle = handle.clone();
        let map_id = map_id.clone();
        move || {
            if active() == endpoint {
                js_bridge::invalidate_map(&map_id, &handle.invalidate());
            }
        }
    });

    let on_submit = {
        let handle = handle.clone();
        let map_id = map_id.clone();
        move |_: ()| handle.load(state, map_id.clone(), table)
    };

    rsx! {
        section {
            ViewHeader {
                title: endpoint.title().to_string(),
                description: description(endpoint).to_string(),
            }
            QueryForm {
                id: format!("form-{}", endpoint.key()),
                state,
                on_submit,
            }
            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }
            if state.is_loading() {
                LoadingSpinner {}
            }
            PanelContainer { id: map_id, height: MAP_HEIGHT }
            DataTable { id: format!("table-{}", endpoint.key()), table }
        }
    }
}
