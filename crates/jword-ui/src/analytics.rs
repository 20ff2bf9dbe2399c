//! Lightweight Simple Analytics event tracking.
//!
//! Calls the global `sa_event` function injected by the Simple
//! Analytics `<script>` tag. All functions silently no-op when the
//! script is absent (e.g., blocked by an ad-blocker or during tests).
//!
//! Event names follow Simple Analytics conventions: lowercase
//! alphanumeric with underscores, max 200 characters.

use wasm_bindgen::prelude::*;

/// Fire a Simple Analytics custom event.
///
/// Silently does nothing when the analytics script is absent.
fn track_event(name: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(func) = js_sys::Reflect::get(&window, &JsValue::from_str("sa_event")) else {
        return;
    };
    if !func.is_function() {
        return;
    }
    let func: js_sys::Function = func.unchecked_into();
    let _ = func.call1(&JsValue::NULL, &JsValue::from_str(name));
}

/// Record that the user ran an analysis.
pub fn track_analyze() {
    track_event("analyze");
}

/// Record a report export with the given channel (`"download"` or
/// `"clipboard"`).
///
/// Fires an event named `report_<channel>`.
///
/// # Panics (debug only)
///
/// Debug-asserts that `channel` is lowercase alphanumeric/underscore
/// and that the resulting event name fits within the 200-character
/// limit.
pub fn track_report(channel: &str) {
    debug_assert!(
        channel
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_'),
        "event channel must be lowercase alphanumeric or underscore, got: {channel:?}"
    );
    let name = format!("report_{channel}");
    debug_assert!(
        name.len() <= 200,
        "event name exceeds 200-character limit: {name:?}"
    );
    track_event(&name);
}
