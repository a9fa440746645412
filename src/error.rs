//! Error handling for the document loader

use std::path::PathBuf;
use thiserror::Error;

/// A collaborator the loader needs but does not implement itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    MarkdownRenderer,
    PdfParser,
}

impl Capability {
    pub fn name(&self) -> &'static str {
        match self {
            Capability::MarkdownRenderer => "markdown renderer",
            Capability::PdfParser => "pdf parser",
        }
    }

    /// How to get the capability back.
    pub fn hint(&self) -> &'static str {
        match self {
            Capability::MarkdownRenderer => {
                "rebuild with `--features markdown` or supply a MarkdownRenderer to the loader"
            }
            Capability::PdfParser => {
                "rebuild with `--features pdf` or supply a PdfParser to the loader"
            }
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Error, Debug)]
pub enum DocLoaderError {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Unsupported file type: {suffix:?}")]
    UnsupportedType { suffix: String },

    #[error("Missing dependency: no {capability} available ({})", .capability.hint())]
    DependencyMissing { capability: Capability },

    #[error("IO error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not valid UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("Corrupt file '{}': {reason}", .path.display())]
    CorruptFile { path: PathBuf, reason: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DocLoaderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DocLoaderError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DocLoaderError>;
