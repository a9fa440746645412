//! Document loader library
//!
//! Resolves a file path to a [`DocumentRecord`]: the file's text plus a
//! metadata map holding at least its `source` path. Plain text, Markdown
//! (rendered to HTML) and PDF are supported, picked by extension.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;

pub use config::Config;
pub use error::{Capability, DocLoaderError, Result};
pub use input::{DocumentLoader, DocumentRecord, FileType, Metadata};

/// Load `path` with the default loader.
pub fn resolve(path: impl AsRef<std::path::Path>) -> Result<DocumentRecord> {
    DocumentLoader::new().resolve(path)
}
