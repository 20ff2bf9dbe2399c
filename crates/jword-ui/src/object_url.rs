//! Scoped object URLs for in-browser file previews.
//!
//! The preview panel renders the selected file without uploading it
//! anywhere, via `URL.createObjectURL`. Object URLs pin the underlying
//! Blob in browser memory until revoked, so each one is wrapped in an
//! [`ObjectUrl`] guard that revokes it on drop. Holding at most one
//! guard per selected file keeps repeated selections from leaking.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur when creating an object URL.
#[derive(Debug, thiserror::Error)]
pub enum ObjectUrlError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for ObjectUrlError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// An object URL that is revoked when the guard is dropped.
///
/// Dropping the guard releases the browser-side Blob reference, so the
/// URL's lifetime is exactly the guard's: selection change replaces the
/// guard (revoking the old URL), unmount drops it.
#[derive(Debug)]
pub struct ObjectUrl {
    url: String,
}

impl ObjectUrl {
    /// Create an object URL for raw bytes with the given MIME type.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectUrlError::JsError`] if Blob or URL creation
    /// fails.
    pub fn from_bytes(bytes: &[u8], mime_type: &str) -> Result<Self, ObjectUrlError> {
        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::new();
        parts.push(&array);

        let opts = BlobPropertyBag::new();
        opts.set_type(mime_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

        let url = web_sys::Url::create_object_url_with_blob(&blob)?;
        Ok(Self { url })
    }

    /// Create an object URL for text content (e.g. a JSON report).
    ///
    /// # Errors
    ///
    /// Returns [`ObjectUrlError::JsError`] if Blob or URL creation
    /// fails.
    pub fn from_text(text: &str, mime_type: &str) -> Result<Self, ObjectUrlError> {
        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str(text));

        let opts = BlobPropertyBag::new();
        opts.set_type(mime_type);
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &opts)?;

        let url = web_sys::Url::create_object_url_with_blob(&blob)?;
        Ok(Self { url })
    }

    /// Create an object URL for a selected file's content, typed with
    /// its declared MIME type.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectUrlError::JsError`] if Blob or URL creation
    /// fails.
    pub fn for_file(file: &jword_core::SelectedFile) -> Result<Self, ObjectUrlError> {
        Self::from_bytes(file.bytes(), file.content_type())
    }

    /// The `blob:` URL, usable as an `iframe` or anchor `href`.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PartialEq for ObjectUrl {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        // Best-effort: the guard is going away either way, and a failed
        // revoke leaves nothing we could retry with.
        let _ = web_sys::Url::revoke_object_url(&self.url);
    }
}
