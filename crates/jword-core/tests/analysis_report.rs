//! Integration test: take a selected file through classification and
//! report generation, then check the JSON the download button produces.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use jword_core::{AnalysisReport, InsightKind, PreviewKind, SelectedFile};

#[test]
fn pdf_selection_to_downloadable_report() {
    // A dropped resume.pdf as the drop zone would wrap it.
    let file = SelectedFile::new(
        "resume.pdf",
        "application/pdf",
        b"%PDF-1.7 fake content".to_vec(),
    );

    assert_eq!(file.preview_kind(), PreviewKind::Pdf);
    assert_eq!(file.base_name(), "resume");

    let report = AnalysisReport::placeholder();
    let json = report.to_json().unwrap();

    // Round-trips through serde.
    let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, report);

    // The report keeps insight order, so the first row is the
    // action-verbs positive.
    assert_eq!(parsed.insights[0].kind, InsightKind::Positive);
    assert_eq!(parsed.insights[0].headline, "Strong Action Verbs");
}

#[test]
fn unsupported_selection_still_reports() {
    // Analysis is canned content, so a .txt file analyzes the same way
    // even though its preview falls back.
    let file = SelectedFile::new("resume.txt", "text/plain", b"plain text resume".to_vec());

    match file.preview_kind() {
        PreviewKind::Unsupported { extension } => assert_eq!(extension, "txt"),
        PreviewKind::Pdf => panic!("text file classified as PDF"),
    }

    let report = AnalysisReport::placeholder();
    assert!(report.score <= 100);
    assert!(!report.insights.is_empty());
}
