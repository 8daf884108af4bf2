//! Integration tests for the doc-preview pipeline

use doc_preview::error::DocPreviewError;
use doc_preview::preview::loader::PreviewContent;
use doc_preview::preview::manager::PreviewManager;
use std::path::Path;

#[tokio::test]
async fn test_text_preview_from_txt() {
    let mut manager = PreviewManager::new();
    let path = Path::new("tests/fixtures/sample_notes.txt");

    let result = manager.load_preview(path).await;
    assert!(result.is_ok());

    match result.unwrap() {
        PreviewContent::Text(text) => {
            assert!(text.contains("quarterly report"));
            assert!(text.contains("preview pane"));
        }
        other => panic!("Expected a text preview, got {:?}", other),
    }
}

#[tokio::test]
async fn test_image_preview_returns_raw_bytes() {
    let mut manager = PreviewManager::new();
    let path = Path::new("tests/fixtures/pixel.png");

    let descriptor = manager.describe(path);
    assert!(descriptor.is_image);
    assert!(descriptor.previewable());

    match manager.load_preview(path).await.unwrap() {
        PreviewContent::Image(bytes) => assert!(!bytes.is_empty()),
        other => panic!("Expected an image preview, got {:?}", other),
    }
}

#[tokio::test]
async fn test_document_preview_returns_raw_bytes() {
    let mut manager = PreviewManager::new();
    let path = Path::new("tests/fixtures/letter.docx");

    let descriptor = manager.describe(path);
    assert!(descriptor.is_docx);
    assert!(descriptor.previewable());

    match manager.load_preview(path).await.unwrap() {
        PreviewContent::Document(bytes) => assert!(!bytes.is_empty()),
        other => panic!("Expected a document preview, got {:?}", other),
    }
}

#[tokio::test]
async fn test_spreadsheet_is_refused() {
    let mut manager = PreviewManager::new();
    let path = Path::new("tests/fixtures/inventory.csv");

    let descriptor = manager.describe(path);
    assert!(descriptor.is_excel);
    assert!(!descriptor.previewable());

    let result = manager.load_preview(path).await;
    assert!(matches!(result, Err(DocPreviewError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = PreviewManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.load_preview(path).await;
    assert!(matches!(result, Err(DocPreviewError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = PreviewManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.load_preview(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = PreviewManager::new();
    let path = Path::new("tests/fixtures/sample_notes.txt");

    // First load
    let first = manager.load_preview(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    // Second load should use cache
    let second = manager.load_preview(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_can_be_disabled() {
    let mut manager = PreviewManager::new().with_cache(false);
    let path = Path::new("tests/fixtures/sample_notes.txt");

    manager.load_preview(path).await.unwrap();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_mixed_case_extension_previews() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("SCRATCH.TXT");
    tokio::fs::write(&path, "scratch contents").await.unwrap();

    let mut manager = PreviewManager::new();
    let descriptor = manager.describe(&path);
    assert_eq!(descriptor.extension, "txt");
    assert!(descriptor.is_text);

    match manager.load_preview(&path).await.unwrap() {
        PreviewContent::Text(text) => assert_eq!(text, "scratch contents"),
        other => panic!("Expected a text preview, got {:?}", other),
    }
}
