//! File type detection

use crate::error::{DocLoaderError, Result};
use std::path::Path;

/// The closed set of formats the loader knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    PlainText,
    Markdown,
    Pdf,
}

impl FileType {
    pub const ALL: [FileType; 3] = [FileType::PlainText, FileType::Markdown, FileType::Pdf];

    /// Case-insensitive lookup of an extension given without its dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "txt" => Some(FileType::PlainText),
            "md" => Some(FileType::Markdown),
            "pdf" => Some(FileType::Pdf),
            _ => None,
        }
    }

    /// Pick the variant for `path` from its final suffix.
    ///
    /// Only the name is inspected, never the content. The error carries the
    /// lowercased suffix with its dot, or an empty string when there is none.
    pub fn detect(path: &Path) -> Result<Self> {
        let suffix = suffix_of(path);
        let file_type = suffix.strip_prefix('.').and_then(FileType::from_extension);
        match file_type {
            Some(file_type) => Ok(file_type),
            None => Err(DocLoaderError::UnsupportedType { suffix }),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FileType::PlainText => "txt",
            FileType::Markdown => "md",
            FileType::Pdf => "pdf",
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FileType::PlainText => "plain text",
            FileType::Markdown => "markdown",
            FileType::Pdf => "pdf",
        };
        write!(f, "{}", name)
    }
}

fn suffix_of(path: &Path) -> String {
    match path.extension() {
        Some(ext) if !ext.is_empty() => format!(".{}", ext.to_string_lossy().to_lowercase()),
        _ => String::new(),
    }
}
