//! Resume optimizer: job details form plus resume upload.

use std::rc::Rc;

use dioxus::prelude::*;
use wasm_bindgen::JsValue;

use jword_core::{EditState, JobDetails, JobField, SelectedFile};
use jword_ui::{FileDropZone, JobDetailsForm, dialog};

/// The optimizer flow.
///
/// The form edits one field at a time ([`EditState`] can only name
/// one); value changes land in [`JobDetails`] on every keystroke. The
/// optimize and build-from-scratch actions are stubs that raise
/// blocking alerts.
#[component]
pub fn OptimizerPage() -> Element {
    let mut details = use_signal(JobDetails::sample);
    let mut editing = use_signal(EditState::default);
    let mut file = use_signal(|| Option::<Rc<SelectedFile>>::None);

    let on_begin_edit = move |field: JobField| {
        editing.write().begin(field);
    };
    let on_change = move |(field, value): (JobField, String)| {
        details.write().set(field, value);
    };
    let on_commit = move |()| {
        editing.write().commit();
    };
    let on_cancel = move |()| {
        editing.write().cancel();
    };

    let on_select = move |selected: Rc<SelectedFile>| {
        file.set(Some(selected));
    };

    let optimize = move |_| {
        dialog::alert_optimize_unimplemented();
    };

    let build_from_scratch = move |_| {
        web_sys::console::log_1(&JsValue::from_str(
            "User wants to build a resume from scratch.",
        ));
        dialog::alert_builder_unimplemented();
    };

    rsx! {
        main { class: "page page-wide",
            div { class: "optimizer-intro",
                h1 { "Optimize your Resume" }
                p { "Tailor your Resume for any particular Job" }
            }

            div { class: "optimizer-grid",
                // Left: the job details form.
                div { class: "optimizer-column",
                    JobDetailsForm {
                        details: details(),
                        editing: editing(),
                        on_begin_edit: on_begin_edit,
                        on_change: on_change,
                        on_commit: on_commit,
                        on_cancel: on_cancel,
                    }
                }

                // Right: resume upload and the stub actions.
                div { class: "optimizer-column",
                    FileDropZone {
                        file: file(),
                        on_select: on_select,
                        prompt: "Upload Resume",
                    }

                    div { class: "optimizer-actions",
                        button { class: "btn-primary btn-wide", onclick: optimize,
                            "Optimize Resume"
                        }
                        button { class: "link-button", onclick: build_from_scratch,
                            "Build a resume from scratch"
                        }
                    }
                }
            }
        }
    }
}
