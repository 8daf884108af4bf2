//! doc-preview library

pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod output;
pub mod preview;

pub use config::Config;
pub use detect::{classify, extract_extension, has_preview_pane, FileTypeDescriptor};
pub use error::{DocPreviewError, Result};
