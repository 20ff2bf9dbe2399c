//! File selection with drag-and-drop and file picker.

use std::rc::Rc;

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdFileUp;

use jword_core::SelectedFile;
use jword_core::file::{content_type_for_name, picker_accept};

/// Props for the [`FileDropZone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileDropZoneProps {
    /// Currently selected file, shown by name. `None` shows the prompt.
    pub file: Option<Rc<SelectedFile>>,
    /// Called with the new selection after its bytes are read.
    pub on_select: EventHandler<Rc<SelectedFile>>,
    /// Prompt text for the browse link ("Click to upload",
    /// "Upload Resume", ...).
    pub prompt: &'static str,
}

/// A drag-and-drop zone with a hidden file input.
///
/// On either input path the first offered file becomes the new
/// selection and is reported to the parent. The picker filters by
/// `.pdf,.doc,.docx`, but that is advisory only: whatever file
/// arrives is accepted without type or size checks.
#[component]
pub fn FileDropZone(props: FileDropZoneProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut read_error = use_signal(|| Option::<String>::None);

    // Read and forward the first file from a list. Shared by the
    // file-picker and drag-and-drop paths.
    let on_select = props.on_select;
    let process_files = move |files: Vec<FileData>| async move {
        if let Some(file) = files.first() {
            let name = file.name();
            match file.read_bytes().await {
                Ok(bytes) => {
                    read_error.set(None);
                    let content_type = content_type_for_name(&name);
                    on_select.call(Rc::new(SelectedFile::new(name, content_type, bytes.to_vec())));
                }
                Err(e) => {
                    read_error.set(Some(format!("Failed to read file: {e}")));
                }
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let zone_class = if dragging() {
        "dropzone dropzone-active"
    } else {
        "dropzone"
    };
    let accept = picker_accept();

    rsx! {
        div {
            class: "{zone_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |evt| {
                evt.prevent_default();
                dragging.set(false);
            },
            ondrop: handle_drop,

            div { class: "dropzone-inner",
                div { class: "dropzone-icon",
                    Icon { icon: LdFileUp, width: 40, height: 40 }
                }

                if let Some(ref file) = props.file {
                    p { class: "dropzone-filename", "{file.name()}" }
                } else {
                    div {
                        p { class: "dropzone-prompt",
                            label { class: "dropzone-browse",
                                input {
                                    r#type: "file",
                                    accept: "{accept}",
                                    class: "hidden-input",
                                    onchange: handle_files,
                                }
                                "{props.prompt}"
                            }
                            " or drag and drop"
                        }
                        p { class: "dropzone-hint", "PDF, DOC, or DOCX" }
                    }
                }

                if let Some(ref err) = read_error() {
                    p { class: "text-error", "{err}" }
                }
            }
        }
    }
}
