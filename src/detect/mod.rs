//! File type detection
//! Maps file names to extensions and preview capability flags

pub mod descriptor;

pub use descriptor::{classify, extract_extension, has_preview_pane, FileTypeDescriptor};
