//! The fetch, decode, render cycle shared by every query view.

use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::future::Future;
use transit_core::params::{Endpoint, QueryParams};
use transit_core::Result;

/// A query view: one endpoint, one response schema, private render state.
pub trait QueryView {
    type Response: DeserializeOwned;
    type Output;

    const ENDPOINT: Endpoint;

    /// Turn a decoded response into the view model for this render cycle.
    fn render(&mut self, params: &QueryParams, response: Self::Response) -> Self::Output;
}

/// Decode a response body against the view's schema.
pub fn decode<V: QueryView>(body: &str) -> Result<V::Response> {
    Ok(serde_json::from_str(body)?)
}

/// Fetch the view's endpoint with `params`, decode the body and render it.
///
/// The only suspension point is `fetch`. Overlapping loads of the same view
/// are neither deduplicated nor cancelled: each renders when its response
/// arrives, so the last one to resolve determines the final state.
/// A failed fetch or decode leaves the view untouched.
pub async fn load<V, F, Fut>(view: &RefCell<V>, params: QueryParams, fetch: F) -> Result<V::Output>
where
    V: QueryView,
    F: FnOnce(Endpoint, QueryParams) -> Fut,
    Fut: Future<Output = Result<String>>,
{
    let body = fetch(V::ENDPOINT, params).await?;
    let response = decode::<V>(&body)?;
    log::debug!(
        "{} rendering service_id={} limit={}",
        V::ENDPOINT.path(),
        params.service,
        params.limit
    );
    Ok(view.borrow_mut().render(&params, response))
}
