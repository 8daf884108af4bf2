//! File name classification for the preview UI
//!
//! Pure functions: any string input (empty, dotless, oddly cased) yields a
//! defined result. An unrecognized extension is a normal outcome with all
//! flags false, not an error.

use serde::Serialize;

const PDF_EXTENSIONS: &[&str] = &["pdf"];
const SPREADSHEET_EXTENSIONS: &[&str] = &["xlsx", "xls", "csv"];
const PLAIN_TEXT_EXTENSIONS: &[&str] = &["txt"];
const WORD_EXTENSIONS: &[&str] = &["docx", "doc"];
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Extension plus capability flags for a single file name.
///
/// Built fresh on every call and never cached; equality is by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileTypeDescriptor {
    pub extension: String,
    pub is_pdf: bool,
    pub is_excel: bool,
    pub is_text: bool,
    pub is_docx: bool,
    pub is_image: bool,
}

impl FileTypeDescriptor {
    /// Classify a file name by its extension.
    ///
    /// Each flag is tested against its own category set. The sets are
    /// disjoint today, but the flags stay independently evaluated so an
    /// overlapping set added later keeps working.
    pub fn classify(name: &str) -> Self {
        let extension = extract_extension(name);
        let ext = extension.as_str();

        Self {
            is_pdf: PDF_EXTENSIONS.contains(&ext),
            is_excel: SPREADSHEET_EXTENSIONS.contains(&ext),
            is_text: PLAIN_TEXT_EXTENSIONS.contains(&ext),
            is_docx: WORD_EXTENSIONS.contains(&ext),
            is_image: IMAGE_EXTENSIONS.contains(&ext),
            extension,
        }
    }

    /// Whether the preview pane can render this file directly.
    ///
    /// Spreadsheets are excluded on purpose: they go to the tabular viewer
    /// instead of the direct preview pane.
    pub fn previewable(&self) -> bool {
        self.is_pdf || self.is_text || self.is_docx || self.is_image
    }
}

/// Lowercased segment after the last `.` in a file name, or the empty
/// string when the name has no dot.
///
/// A trailing dot (`"report."`) yields the empty string.
pub fn extract_extension(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => String::new(),
    }
}

/// Classify a file name by its extension.
pub fn classify(name: &str) -> FileTypeDescriptor {
    FileTypeDescriptor::classify(name)
}

/// Whether the preview pane can render the named file directly.
pub fn has_preview_pane(name: &str) -> bool {
    classify(name).previewable()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(extract_extension("report.PDF"), "pdf");
        assert_eq!(extract_extension("photo.JpEg"), "jpeg");
    }

    #[test]
    fn extension_takes_final_segment_only() {
        assert_eq!(extract_extension("archive.tar.gz"), "gz");
    }

    #[test]
    fn extension_of_dotless_name_is_empty() {
        assert_eq!(extract_extension("noext"), "");
        assert_eq!(extract_extension(""), "");
    }

    #[test]
    fn extension_of_trailing_dot_is_empty() {
        assert_eq!(extract_extension("trailing."), "");
    }

    #[test]
    fn csv_counts_as_spreadsheet_only() {
        let descriptor = classify("data.CSV");
        assert_eq!(descriptor.extension, "csv");
        assert!(descriptor.is_excel);
        assert!(!descriptor.is_pdf);
        assert!(!descriptor.is_text);
        assert!(!descriptor.is_docx);
        assert!(!descriptor.is_image);
    }

    #[test]
    fn jpeg_is_previewable_image() {
        let descriptor = classify("photo.jpeg");
        assert!(descriptor.is_image);
        assert!(has_preview_pane("photo.jpeg"));
    }

    #[test]
    fn spreadsheets_are_excluded_from_preview_pane() {
        let descriptor = classify("sheet.xlsx");
        assert!(descriptor.is_excel);
        assert!(!has_preview_pane("sheet.xlsx"));
    }

    #[test]
    fn unknown_extension_sets_no_flags() {
        let descriptor = classify("unknown.xyz");
        assert!(!descriptor.is_pdf);
        assert!(!descriptor.is_excel);
        assert!(!descriptor.is_text);
        assert!(!descriptor.is_docx);
        assert!(!descriptor.is_image);
        assert!(!has_preview_pane("unknown.xyz"));
    }

    #[test]
    fn word_documents_preview() {
        assert!(classify("letter.doc").is_docx);
        assert!(classify("letter.docx").is_docx);
        assert!(has_preview_pane("letter.docx"));
    }

    #[test]
    fn classification_is_idempotent() {
        assert_eq!(classify("summary.pdf"), classify("summary.pdf"));
        assert_eq!(classify("noext"), classify("noext"));
    }
}
