//! User-selected file records and preview classification.
//!
//! A [`SelectedFile`] is the opaque handle produced by the drop zone:
//! name, declared MIME type, and raw bytes. It is held in page-level
//! transient state, replaced wholesale on a new selection, and cleared
//! by "Upload New". Nothing here is persisted.

/// Extensions offered by the file picker. Advisory only; a dropped
/// file of any type is accepted unconditionally.
pub const PICKER_EXTENSIONS: &[&str] = &["pdf", "doc", "docx"];

/// The `accept` attribute value for the hidden file input
/// (`.pdf,.doc,.docx`).
#[must_use]
pub fn picker_accept() -> String {
    let dotted: Vec<String> = PICKER_EXTENSIONS.iter().map(|e| format!(".{e}")).collect();
    dotted.join(",")
}

/// MIME type for a file name, by extension.
///
/// The drop zone builds [`SelectedFile`]s from name + bytes, so the
/// declared type is derived here. Unknown extensions get the generic
/// binary type, which routes them to the preview fallback.
#[must_use]
pub fn content_type_for_name(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// How the preview panel should render a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewKind {
    /// Delegate to the browser's embedded PDF viewer.
    Pdf,
    /// No native viewer; show a fallback notice naming the extension.
    /// The extension is empty when the file name has none.
    Unsupported {
        /// Lowercased extension without the leading dot.
        extension: String,
    },
}

/// A user-supplied file held in page state.
///
/// Byte content lives here rather than in the DOM so the preview panel
/// can mint fresh object URLs from it on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl SelectedFile {
    /// Wrap a file read from the picker or a drop event.
    #[must_use]
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Original file name, extension included.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared MIME type (from the browser; never sniffed).
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Raw file content.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Content length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the file is empty. Empty files are still accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Extension after the last dot, lowercased. Empty when the name
    /// has no dot.
    #[must_use]
    pub fn extension(&self) -> String {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default()
    }

    /// File name with the extension stripped, e.g. for naming a
    /// downloaded report after the resume.
    #[must_use]
    pub fn base_name(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map_or(self.name.as_str(), |(base, _)| base)
    }

    /// Classify the file for the preview panel.
    ///
    /// Only the declared MIME type is consulted: `application/pdf`
    /// gets the embedded viewer, everything else the fallback notice.
    #[must_use]
    pub fn preview_kind(&self) -> PreviewKind {
        if self.content_type == "application/pdf" {
            PreviewKind::Pdf
        } else {
            PreviewKind::Unsupported {
                extension: self.extension(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf() -> SelectedFile {
        SelectedFile::new("resume.pdf", "application/pdf", vec![b'%', b'P', b'D', b'F'])
    }

    #[test]
    fn pdf_gets_embedded_viewer() {
        assert_eq!(pdf().preview_kind(), PreviewKind::Pdf);
    }

    #[test]
    fn text_file_falls_back_with_extension() {
        let file = SelectedFile::new("resume.txt", "text/plain", b"hello".to_vec());
        assert_eq!(
            file.preview_kind(),
            PreviewKind::Unsupported {
                extension: "txt".into()
            }
        );
    }

    #[test]
    fn pdf_extension_with_wrong_mime_falls_back() {
        // Classification trusts the declared type, not the name.
        let file = SelectedFile::new("resume.pdf", "application/octet-stream", vec![]);
        assert_eq!(
            file.preview_kind(),
            PreviewKind::Unsupported {
                extension: "pdf".into()
            }
        );
    }

    #[test]
    fn extensionless_name_yields_empty_extension() {
        let file = SelectedFile::new("resume", "text/plain", vec![]);
        assert_eq!(file.extension(), "");
        assert_eq!(file.base_name(), "resume");
        assert_eq!(
            file.preview_kind(),
            PreviewKind::Unsupported {
                extension: String::new()
            }
        );
    }

    #[test]
    fn extension_is_lowercased() {
        let file = SelectedFile::new("Resume.PDF", "application/pdf", vec![]);
        assert_eq!(file.extension(), "pdf");
    }

    #[test]
    fn base_name_strips_only_last_extension() {
        let file = SelectedFile::new("jane.doe.resume.pdf", "application/pdf", vec![]);
        assert_eq!(file.base_name(), "jane.doe.resume");
    }

    #[test]
    fn len_reports_byte_count() {
        assert_eq!(pdf().len(), 4);
        assert!(!pdf().is_empty());
    }

    #[test]
    fn picker_accept_lists_dotted_extensions() {
        assert_eq!(picker_accept(), ".pdf,.doc,.docx");
    }

    #[test]
    fn content_type_lookup_covers_picker_extensions() {
        assert_eq!(content_type_for_name("resume.pdf"), "application/pdf");
        assert_eq!(content_type_for_name("resume.DOC"), "application/msword");
        assert_eq!(content_type_for_name("notes.txt"), "text/plain");
        assert_eq!(content_type_for_name("mystery"), "application/octet-stream");
        assert_eq!(content_type_for_name("archive.zip"), "application/octet-stream");
    }
}
