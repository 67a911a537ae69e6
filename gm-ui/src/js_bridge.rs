//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3 trend chart and the Leaflet river map live in `assets/js/*.js`,
//! are embedded at compile time and evaluated as globals once both libraries
//! have loaded. Payloads are serialized with `serde_json` and spliced in as
//! object literals, so no string escaping is involved.

// Embed the widget scripts at compile time
static TREND_CHART_JS: &str = include_str!("../assets/js/trend-chart.js");
static RIVER_MAP_JS: &str = include_str!("../assets/js/river-map.js");

/// Globals promoted to `window` once the scripts are evaluated.
const WIDGET_FUNCTIONS: [&str; 4] = [
    "renderTrendChart",
    "destroyTrendChart",
    "renderRiverMap",
    "destroyRiverMap",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('[GM] JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Evaluate the widget scripts once D3 and Leaflet are both present.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_widgets() {
    let all_js = [TREND_CHART_JS, RIVER_MAP_JS].join("\n");

    // Stash the source on window so the polling callback can eval it
    // at global scope rather than inside the setInterval closure.
    let store_js = format!(
        "if (!window.__gmWidgetsReady && !window.__gmWidgetScripts) {{ window.__gmWidgetScripts = {}; }}",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let promote = WIDGET_FUNCTIONS
        .iter()
        .map(|f| format!("if (typeof {f} !== 'undefined') window.{f} = {f};"))
        .collect::<Vec<String>>()
        .join("\n");

    let init_js = format!(
        r#"
        (function() {{
            if (window.__gmWidgetsReady || window.__gmWidgetsPolling) return;
            window.__gmWidgetsPolling = true;
            var waitForLibs = setInterval(function() {{
                if (typeof d3 !== 'undefined' && typeof L !== 'undefined') {{
                    clearInterval(waitForLibs);
                    (0, eval)(window.__gmWidgetScripts);
                    delete window.__gmWidgetScripts;
                    {promote}
                    window.__gmWidgetsReady = true;
                    console.log('[GM] widgets initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
}

/// `window.<function>("<container>", <payload>, ...)` as JS source.
fn widget_call(function: &str, container_id: &str, payloads: &[&str]) -> String {
    let mut args = vec![serde_json::to_string(container_id).unwrap_or_else(|_| "\"\"".into())];
    args.extend(payloads.iter().map(|p| p.to_string()));
    format!("window.{}({})", function, args.join(", "))
}

/// JS that polls until the widgets are ready and the container exists, then calls.
///
/// At most one poller is pending per container: a newer call replaces the
/// older one, and [`cancel_pending_source`] clears it.
fn ready_call_source(function: &str, container_id: &str, payloads: &[&str]) -> String {
    let call = widget_call(function, container_id, payloads);
    let id = serde_json::to_string(container_id).unwrap_or_default();
    format!(
        r#"
        (function() {{
            var id = {id};
            var pending = window.__gmPending = window.__gmPending || {{}};
            if (pending[id]) clearInterval(pending[id]);
            var poll = setInterval(function() {{
                if (window.__gmWidgetsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById(id)) {{
                    clearInterval(poll);
                    if (pending[id] === poll) delete pending[id];
                    try {{
                        {call};
                    }} catch(e) {{ console.error('[GM] {function} error:', e); }}
                }}
            }}, 100);
            pending[id] = poll;
        }})();
        "#,
    )
}

/// JS that stops the pending poller for `container_id`, if any.
fn cancel_pending_source(container_id: &str) -> String {
    let id = serde_json::to_string(container_id).unwrap_or_default();
    format!(
        "if (window.__gmPending && window.__gmPending[{id}]) {{ clearInterval(window.__gmPending[{id}]); delete window.__gmPending[{id}]; }}"
    )
}

/// JS that cancels any pending draw, then tears the widget down.
fn destroy_source(function: &str, container_id: &str) -> String {
    format!(
        "{} if (window.{}) {};",
        cancel_pending_source(container_id),
        function,
        widget_call(function, container_id, &[])
    )
}

fn call_when_ready(function: &str, container_id: &str, payloads: &[&str]) {
    call_js(&ready_call_source(function, container_id, payloads));
}

/// Draw (or redraw) the trend chart into `container_id`.
pub fn render_trend_chart(container_id: &str, chart_json: &str) {
    call_when_ready("renderTrendChart", container_id, &[chart_json]);
}

/// Create the map on first call, then replace its markers on later calls.
pub fn render_river_map(container_id: &str, view_json: &str, markers_json: &str) {
    call_when_ready("renderRiverMap", container_id, &[view_json, markers_json]);
}

pub fn destroy_trend_chart(container_id: &str) {
    call_js(&destroy_source("destroyTrendChart", container_id));
}

/// Tear down the Leaflet instance bound to `container_id`, closing any popup.
///
/// A draw still waiting on Leaflet or the container is dropped as well.
pub fn destroy_river_map(container_id: &str) {
    call_js(&destroy_source("destroyRiverMap", container_id));
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("[GM] alert failed: {:?}", e);
            }
        }
        None => log::warn!("[GM] no window for alert: {}", message),
    }
}
