//! Classification report structures

use crate::detect::FileTypeDescriptor;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One classified file in a report.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationEntry {
    /// File name as given by the caller
    pub file: String,

    /// Extension and capability flags
    pub descriptor: FileTypeDescriptor,

    /// Whether the preview pane can render this file
    pub previewable: bool,
}

impl ClassificationEntry {
    pub fn new(file: String) -> Self {
        let descriptor = FileTypeDescriptor::classify(&file);
        let previewable = descriptor.previewable();

        Self {
            file,
            descriptor,
            previewable,
        }
    }

    /// Human-readable category name for console output.
    pub fn category_label(&self) -> &'static str {
        if self.descriptor.is_pdf {
            "PDF"
        } else if self.descriptor.is_excel {
            "Spreadsheet"
        } else if self.descriptor.is_text {
            "Plain text"
        } else if self.descriptor.is_docx {
            "Word document"
        } else if self.descriptor.is_image {
            "Image"
        } else {
            "Unknown"
        }
    }
}

/// Classification results for a batch of file names.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    /// Report generation timestamp
    pub generated_at: DateTime<Utc>,

    /// One entry per input file, in input order
    pub entries: Vec<ClassificationEntry>,
}

impl ClassificationReport {
    pub fn new(files: impl IntoIterator<Item = String>) -> Self {
        Self {
            generated_at: Utc::now(),
            entries: files.into_iter().map(ClassificationEntry::new).collect(),
        }
    }

    pub fn previewable_count(&self) -> usize {
        self.entries.iter().filter(|e| e.previewable).count()
    }
}
