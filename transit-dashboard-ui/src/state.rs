//! Per-view form state and the load runner.
//!
//! Every tab owns one `QueryState`. Nothing is shared between views.

use crate::api;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use transit_core::params::{Limit, QueryParams, ServiceId};
use transit_views::{load, QueryView};

/// Reactive state of one query view's form and request lifecycle.
#[derive(Clone, Copy, PartialEq)]
pub struct QueryState {
    /// Selected day type
    pub service: Signal<ServiceId>,
    /// Selected result limit
    pub limit: Signal<Limit>,
    /// Requests issued and not yet settled
    pub in_flight: Signal<usize>,
    /// Message of the last failed load, cleared by the next success
    pub error_msg: Signal<Option<String>>,
}

impl QueryState {
    /// Create a new QueryState with the default form values. Call inside a hook.
    pub fn new() -> Self {
        Self {
            service: Signal::new(ServiceId::default()),
            limit: Signal::new(Limit::default()),
            in_flight: Signal::new(0),
            error_msg: Signal::new(None),
        }
    }

    /// Current form values, read without subscribing.
    pub fn params(&self) -> QueryParams {
        QueryParams::new(*self.service.peek(), *self.limit.peek())
    }

    pub fn is_loading(&self) -> bool {
        (self.in_flight)() > 0
    }
}

/// Fetch, decode and render `view` with the form's current values, then hand
/// the output to `apply`.
///
/// Failures are logged and shown in the view's error banner; `apply` is not
/// called and the previous render stays on screen. Loads already in flight
/// are not cancelled.
pub fn spawn_load<V, F>(view: Rc<RefCell<V>>, mut state: QueryState, apply: F)
where
    V: QueryView + 'static,
    F: FnOnce(V::Output) + 'static,
{
    let params = state.params();
    *state.in_flight.write() += 1;

    spawn(async move {
        let result = load(&*view, params, api::fetch_text).await;
        state.in_flight.with_mut(|n| *n = n.saturating_sub(1));
        match result {
            Ok(output) => {
                state.error_msg.set(None);
                apply(output);
            }
            Err(err) => {
                log::error!("{} failed: {}", V::ENDPOINT.path(), err);
                state.error_msg.set(Some(err.to_string()));
            }
        }
    });
}
