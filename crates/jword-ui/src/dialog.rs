//! Blocking user-facing dialogs.
//!
//! Error surfaces in this app are deliberately blunt: a missing file or
//! an unimplemented feature raises a blocking `window.alert()`, not a
//! recoverable state transition. The alert is terminal to the
//! triggering action only.

use wasm_bindgen::JsValue;

/// Show a blocking alert dialog.
///
/// Falls back to a console warning when no window exists or the alert
/// call fails (e.g. headless environments). The message is advisory,
/// so there is nothing to propagate.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        web_sys::console::warn_1(&JsValue::from_str(message));
        return;
    };
    if window.alert_with_message(message).is_err() {
        web_sys::console::warn_1(&JsValue::from_str(message));
    }
}

/// Alert raised when a dependent action runs without a selected file.
pub fn alert_no_file() {
    alert("Please upload a file first.");
}

/// Alert raised by the unimplemented optimize action.
pub fn alert_optimize_unimplemented() {
    alert("Optimization functionality is not yet implemented.");
}

/// Alert raised by the unimplemented resume builder.
pub fn alert_builder_unimplemented() {
    alert("Resume builder functionality is not yet implemented.");
}
