//! PDF parsing capability

use crate::error::Result;

/// Opens PDF bytes into a paged document.
pub trait PdfParser: Send + Sync {
    /// Fails with `CorruptFile` when `bytes` are not a PDF at all. `path` is
    /// only used for error reporting.
    fn open(&self, path: &std::path::Path, bytes: &[u8]) -> Result<Box<dyn PdfDocument>>;
}

/// A parsed PDF whose pages can be read one at a time.
pub trait PdfDocument {
    fn page_count(&self) -> usize;

    /// Text of the page at `index` (0-based, page order). `Ok(None)` means the
    /// page carries no extractable text.
    fn page_text(&self, index: usize) -> Result<Option<String>>;
}

#[cfg(feature = "pdf")]
pub use lopdf_backend::LopdfParser;

#[cfg(feature = "pdf")]
mod lopdf_backend {
    use super::{PdfDocument, PdfParser};
    use crate::error::{DocLoaderError, Result};
    use std::path::{Path, PathBuf};

    /// PDF parser backed by lopdf.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct LopdfParser;

    struct LopdfDocument {
        path: PathBuf,
        document: lopdf::Document,
        page_numbers: Vec<u32>,
    }

    impl PdfParser for LopdfParser {
        fn open(&self, path: &Path, bytes: &[u8]) -> Result<Box<dyn PdfDocument>> {
            let document =
                lopdf::Document::load_mem(bytes).map_err(|e| DocLoaderError::CorruptFile {
                    path: path.to_path_buf(),
                    reason: format!("Failed to parse PDF: {}", e),
                })?;

            // get_pages is keyed by 1-based page number, already in page order
            let page_numbers = document.get_pages().keys().copied().collect();

            Ok(Box::new(LopdfDocument {
                path: path.to_path_buf(),
                document,
                page_numbers,
            }))
        }
    }

    impl PdfDocument for LopdfDocument {
        fn page_count(&self) -> usize {
            self.page_numbers.len()
        }

        fn page_text(&self, index: usize) -> Result<Option<String>> {
            let Some(&page_number) = self.page_numbers.get(index) else {
                return Ok(None);
            };

            let text = self
                .document
                .extract_text(&[page_number])
                .map_err(|e| DocLoaderError::CorruptFile {
                    path: self.path.clone(),
                    reason: format!("Failed to extract page {}: {}", page_number, e),
                })?;

            Ok(Some(text).filter(|t| !t.is_empty()))
        }
    }
}

/// The parser compiled into this build, if any.
#[cfg(feature = "pdf")]
pub fn default_parser() -> Option<std::sync::Arc<dyn PdfParser>> {
    Some(std::sync::Arc::new(LopdfParser))
}

#[cfg(not(feature = "pdf"))]
pub fn default_parser() -> Option<std::sync::Arc<dyn PdfParser>> {
    None
}
