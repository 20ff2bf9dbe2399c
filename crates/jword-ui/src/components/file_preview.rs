//! In-browser preview for the selected file.
//!
//! Owns the preview's object URL: one guard per selected file,
//! replaced when the selection changes and dropped on unmount, so at
//! most one URL is ever alive here. A refresh counter keys the preview
//! surface; bumping it recreates the `<iframe>` without touching the
//! selection or the URL, which un-sticks embedded viewers that cache
//! aggressively.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdRefreshCw, LdTriangleAlert};

use jword_core::{PreviewKind, SelectedFile};

use crate::object_url::ObjectUrl;

/// Props for the [`FilePreview`] component.
#[derive(Props, Clone)]
pub struct FilePreviewProps {
    /// The file to preview.
    pub file: Rc<SelectedFile>,
}

impl PartialEq for FilePreviewProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.file, &other.file)
    }
}

/// Preview panel: header bar with the file name and a refresh button,
/// then either the browser's embedded PDF viewer or a fallback notice
/// naming the file's extension.
#[component]
pub fn FilePreview(props: FilePreviewProps) -> Element {
    // The object URL guard for the current selection. Replacing or
    // clearing the value drops the old guard, which revokes its URL.
    let mut resource: Signal<Option<ObjectUrl>> = use_signal(|| None);
    // Which selection `resource` belongs to, by Rc identity.
    let mut bound_file: Signal<Option<Rc<SelectedFile>>> = use_signal(|| None);
    let mut refresh_token = use_signal(|| 0u64);
    let mut preview_error = use_signal(|| Option::<String>::None);

    // On selection change: release the old URL, mint a new one, and
    // reset the refresh counter.
    let selection_changed = !bound_file
        .peek()
        .as_ref()
        .is_some_and(|prev| Rc::ptr_eq(prev, &props.file));
    if selection_changed {
        bound_file.set(Some(Rc::clone(&props.file)));
        refresh_token.set(0);
        match ObjectUrl::for_file(&props.file) {
            Ok(url) => {
                resource.set(Some(url));
                preview_error.set(None);
            }
            Err(e) => {
                resource.set(None);
                preview_error.set(Some(format!("Failed to create preview: {e}")));
            }
        }
    }

    // Release the URL when the panel is unmounted, whatever state it
    // is in.
    use_drop(move || {
        resource.set(None);
    });

    let token = refresh_token();
    let url = resource.read().as_ref().map(|u| u.url().to_owned());
    let file_name = props.file.name().to_owned();
    let kind = props.file.preview_kind();

    rsx! {
        div { class: "preview-panel",
            // Header: file name chip and refresh button.
            div { class: "preview-header",
                div { class: "preview-title",
                    Icon { icon: LdFileText, width: 20, height: 20 }
                    span { class: "preview-filename", "{file_name}" }
                }
                button {
                    class: "icon-button",
                    aria_label: "Refresh Preview",
                    onclick: move |_| {
                        refresh_token += 1;
                    },
                    Icon { icon: LdRefreshCw, width: 20, height: 20 }
                }
            }

            // Preview surface.
            div { class: "preview-body",
                if let Some(ref err) = preview_error() {
                    p { class: "text-error", "{err}" }
                } else if let Some(url) = url {
                    {render_surface(&kind, &url, token)}
                }
            }
        }
    }
}

/// Render the preview surface for one file kind.
///
/// Both arms key their root element with the refresh counter so a
/// refresh discards and rebuilds the rendering.
fn render_surface(kind: &PreviewKind, url: &str, token: u64) -> Element {
    match kind {
        PreviewKind::Pdf => rsx! {
            iframe {
                key: "{token}",
                src: "{url}",
                class: "preview-frame",
                title: "File Preview",
            }
        },
        PreviewKind::Unsupported { extension } => rsx! {
            div { key: "{token}", class: "preview-fallback",
                Icon { icon: LdTriangleAlert, width: 48, height: 48 }
                h3 { "Preview not available" }
                p {
                    "Your browser does not support previews for "
                    strong { ".{extension}" }
                    " files."
                }
            }
        },
    }
}
