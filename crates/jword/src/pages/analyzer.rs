//! Resume analyzer: upload view and results view.

use std::rc::Rc;

use dioxus::prelude::*;

use jword_core::{AnalysisReport, SelectedFile};
use jword_ui::{
    AnalysisHeader, AnalysisResults, FileDropZone, FilePreview, analytics, dialog,
};

/// The analyzer flow.
///
/// Starts on the upload view. "Analyze" switches to the results view
/// when a file is selected and raises a blocking alert otherwise, with no
/// view transition on the error path. "Upload New" clears everything
/// back to the upload view; so does picking a different file while
/// results are showing.
#[component]
pub fn AnalyzerPage() -> Element {
    let mut file = use_signal(|| Option::<Rc<SelectedFile>>::None);
    // `Some` means the results view is showing.
    let mut report = use_signal(|| Option::<Rc<AnalysisReport>>::None);

    let on_select = move |selected: Rc<SelectedFile>| {
        file.set(Some(selected));
        report.set(None);
    };

    let analyze = move |_| {
        if file.peek().is_some() {
            // Analysis is canned content for now; the interesting part
            // is the view machinery around it.
            report.set(Some(Rc::new(AnalysisReport::placeholder())));
            analytics::track_analyze();
        } else {
            dialog::alert_no_file();
        }
    };

    let upload_new = move |()| {
        report.set(None);
        file.set(None);
    };

    if let (Some(selected), Some(current)) = (file(), report()) {
        let file_name = selected.name().to_owned();
        let base_name = selected.base_name().to_owned();

        rsx! {
            main { class: "page page-wide",
                div { class: "analyzer-grid",
                    // Left: fixed header, scrollable score + insights.
                    div { class: "panel analyzer-results",
                        AnalysisHeader {
                            file_name: file_name,
                            base_name: base_name,
                            report: Rc::clone(&current),
                            on_upload_new: upload_new,
                        }
                        div { class: "analyzer-scroll",
                            AnalysisResults { report: current }
                        }
                    }

                    // Right: local file preview.
                    div { class: "analyzer-preview",
                        FilePreview { file: selected }
                    }
                }
            }
        }
    } else {
        // Styled as disabled without a file, but still clickable so the
        // missing-file alert can fire.
        let analyze_class = if file.read().is_some() {
            "btn-primary btn-wide"
        } else {
            "btn-primary btn-wide btn-dimmed"
        };

        rsx! {
            main { class: "page page-narrow",
                div { class: "analyzer-intro",
                    h1 { "Analyze and Score your Resume" }
                    p { "Upload your document below to get an instant analysis and score." }
                }

                FileDropZone {
                    file: file(),
                    on_select: on_select,
                    prompt: "Click to upload",
                }

                div { class: "analyzer-actions",
                    button { class: "{analyze_class}", onclick: analyze, "Analyze" }
                }
            }
        }
    }
}
