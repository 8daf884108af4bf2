//! Preview content loading for the supported file types

use crate::error::{DocPreviewError, Result};
use std::path::Path;
use tokio::fs;

/// Content handed to the preview pane.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewContent {
    /// Rendered as text: plain-text files and extracted PDF text.
    Text(String),
    /// Raw image bytes, rendered natively by the pane.
    Image(Vec<u8>),
    /// Raw word-processor bytes, rendered by the pane's document viewer.
    Document(Vec<u8>),
}

pub trait PreviewLoader {
    fn load(&self, path: &Path) -> impl std::future::Future<Output = Result<PreviewContent>> + Send;
}

pub struct PdfTextLoader;

impl PreviewLoader for PdfTextLoader {
    async fn load(&self, path: &Path) -> Result<PreviewContent> {
        let bytes = fs::read(path).await.map_err(|e| {
            DocPreviewError::Io(e)
        })?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            DocPreviewError::PdfExtraction(format!("Failed to extract text from PDF '{}': {}", path.display(), e))
        })?;
        Ok(PreviewContent::Text(text))
    }
}

pub struct PlainTextLoader;

impl PreviewLoader for PlainTextLoader {
    async fn load(&self, path: &Path) -> Result<PreviewContent> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            DocPreviewError::Io(e)
        })?;
        Ok(PreviewContent::Text(content))
    }
}

pub struct ImageLoader;

impl PreviewLoader for ImageLoader {
    async fn load(&self, path: &Path) -> Result<PreviewContent> {
        let bytes = fs::read(path).await.map_err(|e| {
            DocPreviewError::Io(e)
        })?;
        Ok(PreviewContent::Image(bytes))
    }
}

pub struct DocumentLoader;

impl PreviewLoader for DocumentLoader {
    async fn load(&self, path: &Path) -> Result<PreviewContent> {
        let bytes = fs::read(path).await.map_err(|e| {
            DocPreviewError::Io(e)
        })?;
        Ok(PreviewContent::Document(bytes))
    }
}
