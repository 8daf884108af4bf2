//! Preview manager for routing files to content loaders

use crate::detect::FileTypeDescriptor;
use crate::error::{DocPreviewError, Result};
use crate::preview::loader::{
    DocumentLoader, ImageLoader, PdfTextLoader, PlainTextLoader, PreviewContent, PreviewLoader,
};
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub struct PreviewManager {
    cache: HashMap<String, PreviewContent>,
    enable_cache: bool,
}

impl PreviewManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Classify the file name component of a path.
    ///
    /// Paths without a name component (e.g. `..`) fall back to the full
    /// path string so the result is still defined.
    pub fn describe(&self, path: &Path) -> FileTypeDescriptor {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());

        FileTypeDescriptor::classify(&name)
    }

    pub async fn load_preview(&mut self, path: &Path) -> Result<PreviewContent> {
        let path_str = path.to_string_lossy().to_string();

        // Check cache first
        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached preview for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        // Validate file exists
        if !path.exists() {
            return Err(DocPreviewError::InvalidInput(
                format!("File does not exist: {}", path.display())
            ));
        }

        let descriptor = self.describe(path);

        // Route to the loader for the matched category; spreadsheets are
        // refused here, mirroring their exclusion from the preview pane.
        let content = if descriptor.is_pdf {
            info!("Extracting preview text from PDF: {}", path.display());
            PdfTextLoader.load(path).await?
        } else if descriptor.is_text {
            info!("Reading plain text file: {}", path.display());
            PlainTextLoader.load(path).await?
        } else if descriptor.is_docx {
            info!("Loading word document: {}", path.display());
            DocumentLoader.load(path).await?
        } else if descriptor.is_image {
            info!("Loading image: {}", path.display());
            ImageLoader.load(path).await?
        } else if descriptor.is_excel {
            return Err(DocPreviewError::UnsupportedFormat(
                format!("Spreadsheets open in the tabular viewer, not the preview pane: {}", path.display())
            ));
        } else {
            return Err(DocPreviewError::UnsupportedFormat(
                format!("No preview available for: {}", path.display())
            ));
        };

        // Cache the result
        if self.enable_cache {
            self.cache.insert(path_str, content.clone());
        }

        Ok(content)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
