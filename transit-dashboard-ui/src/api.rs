//! Browser `fetch` of the query endpoints.
//!
//! Requests go to the page's own origin, so the dashboard works wherever the
//! backend serves it.

use transit_core::params::{Endpoint, QueryParams};
use transit_core::{Result, TransitError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Map a rejected promise or failed JS call to a transport error.
pub fn js_error(value: JsValue) -> TransitError {
    TransitError::Transport(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// GET `endpoint` with `params` and return the body text.
pub async fn fetch_text(endpoint: Endpoint, params: QueryParams) -> Result<String> {
    let window =
        web_sys::window().ok_or_else(|| TransitError::Transport("no browser window".to_string()))?;
    let origin = window.location().origin().map_err(js_error)?;
    let url = endpoint.url(&origin, &params);
    log::info!("GET {}", url);

    let response: Response = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    if !response.ok() {
        return Err(TransitError::HttpStatus {
            url,
            status: response.status(),
        });
    }

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    body.as_string()
        .ok_or_else(|| TransitError::Transport(format!("{}: response body is not text", url)))
}
