//! Report download via object URLs.
//!
//! Dioxus has no built-in file download API. Downloads are triggered by
//! minting an [`ObjectUrl`] for the content and programmatically
//! clicking a temporary `<a download>` element; the guard revokes the
//! URL when it goes out of scope.

use wasm_bindgen::JsCast;

use crate::object_url::{ObjectUrl, ObjectUrlError};

/// Errors that can occur when triggering a file download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// Object URL creation failed.
    #[error(transparent)]
    ObjectUrl(#[from] ObjectUrlError),
    /// A DOM call failed or a required object was missing.
    #[error("browser API error: {0}")]
    Dom(String),
}

impl From<wasm_bindgen::JsValue> for DownloadError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{value:?}"))
    }
}

/// Download `text` as a file named `filename`.
///
/// # Errors
///
/// Returns [`DownloadError`] if the object URL cannot be created or if
/// any DOM call (window, document, anchor creation) fails.
pub fn save_text(text: &str, filename: &str, mime_type: &str) -> Result<(), DownloadError> {
    let url = ObjectUrl::from_text(text, mime_type)?;

    let window = web_sys::window().ok_or_else(|| DownloadError::Dom("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DownloadError::Dom("no document".into()))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| DownloadError::Dom(format!("failed to cast element: {e:?}")))?;

    anchor.set_href(url.url());
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| DownloadError::Dom("no document body".into()))?;
    body.append_child(&anchor)?;
    anchor.click();

    // The download is already initiated; failing to remove the anchor
    // is not a failed download. The object URL is revoked when `url`
    // drops at the end of this scope.
    let _ = body.remove_child(&anchor);

    Ok(())
}
