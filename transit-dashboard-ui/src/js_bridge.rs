//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The map and chart helpers live in `assets/js/*.js` and drive Leaflet and
//! Chart.js, which the host page loads as plain `<script>` globals. The
//! helpers are evaluated at global scope once both libraries are present and
//! exposed via `window.*`. Payloads cross the boundary as JSON produced from
//! the view models in `transit-views`.

use serde::Serialize;
use transit_views::chart::ChartBatch;
use transit_views::map::{MapCommand, MapConfig};

static MAP_BRIDGE_JS: &str = include_str!("../assets/js/map-bridge.js");
static CHART_BRIDGE_JS: &str = include_str!("../assets/js/chart-bridge.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('[transit] JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `text` as a JS string literal.
fn js_string(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string())
}

/// `JSON.parse(...)` expression for `value`, or `None` if it cannot be encoded.
fn js_payload<T: Serialize + ?Sized>(value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(json) => Some(format!("JSON.parse({})", js_string(&json))),
        Err(err) => {
            log::error!("failed to encode bridge payload: {}", err);
            None
        }
    }
}

/// Evaluate the bridge scripts once Leaflet and Chart.js are loaded.
///
/// The scripts declare plain `function`s. They are stored on `window` and
/// evaluated with an indirect `eval` from inside the polling callback so the
/// declarations land at global scope, then promoted to `window.*`.
/// Call once at app startup.
pub fn init_bridge() {
    let all_js = [MAP_BRIDGE_JS, CHART_BRIDGE_JS].join("\n");
    call_js(&format!("window.__tqBridgeScripts = {};", js_string(&all_js)));

    let init_js = r#"
        (function() {
            var waitForLibs = setInterval(function() {
                if (typeof L !== 'undefined' && typeof Chart !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__tqBridgeScripts);
                    delete window.__tqBridgeScripts;
                    if (typeof tqInitMap !== 'undefined') window.tqInitMap = tqInitMap;
                    if (typeof tqHasMap !== 'undefined') window.tqHasMap = tqHasMap;
                    if (typeof tqApplyMapCommands !== 'undefined') window.tqApplyMapCommands = tqApplyMapCommands;
                    if (typeof tqRenderCharts !== 'undefined') window.tqRenderCharts = tqRenderCharts;
                    window.__tqBridgeReady = true;
                    console.log('[transit] bridge initialized');
                }
            }, 100);
        })();
    "#;
    call_js(init_js);
}

/// Poll until the bridge is ready and `ready_check` holds, then run `call`.
fn when_ready(ready_check: &str, call: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__tqBridgeReady && {ready_check}) {{
                    clearInterval(poll);
                    try {{
                        {call}
                    }} catch(e) {{ console.error('[transit] bridge error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Create the Leaflet map inside `container_id` once the element exists.
/// Repeated calls for the same container are no-ops.
pub fn init_map(container_id: &str, config: &MapConfig) {
    let Some(config) = js_payload(config) else {
        return;
    };
    let id = js_string(container_id);
    when_ready(
        &format!("document.getElementById({id})"),
        &format!("window.tqInitMap({id}, {config});"),
    );
}

/// Run map commands against the map in `container_id`.
pub fn apply_map_commands(container_id: &str, commands: &[MapCommand]) {
    let Some(commands) = js_payload(commands) else {
        return;
    };
    let id = js_string(container_id);
    when_ready(
        &format!("window.tqHasMap({id})"),
        &format!("window.tqApplyMapCommands({id}, {commands});"),
    );
}

/// Like [`apply_map_commands`], deferred by one tick so a container that just
/// became visible has its final size.
pub fn invalidate_map(container_id: &str, commands: &[MapCommand]) {
    let Some(commands) = js_payload(commands) else {
        return;
    };
    let id = js_string(container_id);
    when_ready(
        &format!("window.tqHasMap({id})"),
        &format!("setTimeout(function() {{ window.tqApplyMapCommands({id}, {commands}); }}, 0);"),
    );
}

/// Destroy the charts in `batch.destroy`, then draw `batch.create` into
/// `container_id`.
pub fn render_charts(container_id: &str, batch: &ChartBatch) {
    let Some(batch) = js_payload(batch) else {
        return;
    };
    let id = js_string(container_id);
    when_ready(
        &format!("document.getElementById({id})"),
        &format!("window.tqRenderCharts({id}, {batch});"),
    );
}
