//! Analysis results view: header bar, score, and insight list.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{
    LdCircleCheck, LdCircleX, LdCopy, LdDownload, LdFileText, LdLightbulb,
};

use jword_core::{AnalysisReport, Insight, InsightKind};

use crate::{analytics, clipboard, download};

/// Props for the [`AnalysisHeader`] component.
#[derive(Props, Clone)]
pub struct AnalysisHeaderProps {
    /// Name of the analyzed file, shown in the chip.
    pub file_name: String,
    /// Base name (no extension) for the report download.
    pub base_name: String,
    /// The report behind the export buttons.
    pub report: Rc<AnalysisReport>,
    /// Called when the user wants to start over with a new file.
    pub on_upload_new: EventHandler<()>,
}

impl PartialEq for AnalysisHeaderProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.report, &other.report)
            && self.file_name == other.file_name
            && self.base_name == other.base_name
    }
}

/// Fixed header above the scrollable results: file name chip, report
/// export buttons, and the "Upload New" reset.
#[component]
pub fn AnalysisHeader(props: AnalysisHeaderProps) -> Element {
    let mut export_error = use_signal(|| Option::<String>::None);

    let download_click = {
        let report = Rc::clone(&props.report);
        let base_name = props.base_name.clone();
        move |_| match report.to_json() {
            Ok(json) => {
                let filename = format!("{base_name}-analysis.json");
                if let Err(e) = download::save_text(&json, &filename, "application/json") {
                    export_error.set(Some(format!("Download failed: {e}")));
                } else {
                    export_error.set(None);
                    analytics::track_report("download");
                }
            }
            Err(e) => export_error.set(Some(format!("Report serialization failed: {e}"))),
        }
    };

    let on_upload_new = props.on_upload_new;
    let copy_click = {
        let report = Rc::clone(&props.report);
        move |_| match report.to_json() {
            Ok(json) => {
                spawn(async move {
                    if let Err(e) = clipboard::copy_text(&json).await {
                        export_error.set(Some(format!("Copy failed: {e}")));
                    } else {
                        export_error.set(None);
                        analytics::track_report("clipboard");
                    }
                });
            }
            Err(e) => export_error.set(Some(format!("Report serialization failed: {e}"))),
        }
    };

    rsx! {
        div { class: "analysis-header",
            div { class: "file-chip",
                Icon { icon: LdFileText, width: 20, height: 20 }
                span { "{props.file_name}" }
            }

            div { class: "analysis-header-actions",
                button {
                    class: "icon-button",
                    aria_label: "Download report as JSON",
                    title: "Download report",
                    onclick: download_click,
                    Icon { icon: LdDownload, width: 20, height: 20 }
                }
                button {
                    class: "icon-button",
                    aria_label: "Copy report to clipboard",
                    title: "Copy report",
                    onclick: copy_click,
                    Icon { icon: LdCopy, width: 20, height: 20 }
                }
                button {
                    class: "btn-primary btn-small",
                    onclick: move |_| on_upload_new.call(()),
                    "Upload New"
                }
            }
        }

        if let Some(ref err) = export_error() {
            p { class: "text-error", "{err}" }
        }
    }
}

/// Props for the [`AnalysisResults`] component.
#[derive(Props, Clone)]
pub struct AnalysisResultsProps {
    /// The report to display.
    pub report: Rc<AnalysisReport>,
}

impl PartialEq for AnalysisResultsProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.report, &other.report)
    }
}

/// Purely presentational: the numeric score followed by the fixed,
/// ordered insight list.
#[component]
pub fn AnalysisResults(props: AnalysisResultsProps) -> Element {
    rsx! {
        div {
            div { class: "score-block",
                h3 { class: "score-caption", "Overall Score" }
                p { class: "score-value", "{props.report.score}" }
                p { class: "score-note",
                    "This score reflects your document's compatibility and clarity."
                }
            }

            div { class: "insight-block",
                h3 { class: "insight-title", "Key Insights" }
                div { class: "insight-list",
                    for insight in props.report.insights.iter() {
                        {render_insight(insight)}
                    }
                }
            }
        }
    }
}

/// Render one insight row with its kind-specific icon.
fn render_insight(insight: &Insight) -> Element {
    let icon = match insight.kind {
        InsightKind::Positive => rsx! {
            span { class: "insight-icon insight-positive",
                Icon { icon: LdCircleCheck, width: 24, height: 24 }
            }
        },
        InsightKind::Negative => rsx! {
            span { class: "insight-icon insight-negative",
                Icon { icon: LdCircleX, width: 24, height: 24 }
            }
        },
        InsightKind::Neutral => rsx! {
            span { class: "insight-icon insight-neutral",
                Icon { icon: LdLightbulb, width: 24, height: 24 }
            }
        },
    };

    rsx! {
        div { class: "insight-row",
            {icon}
            div {
                p { class: "insight-headline", "{insight.headline}" }
                p { class: "insight-suggestion", "{insight.suggestion}" }
            }
        }
    }
}
