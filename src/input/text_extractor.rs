//! Per-format loaders producing a `DocumentRecord`

use crate::error::{Capability, DocLoaderError, Result};
use crate::input::markdown::MarkdownRenderer;
use crate::input::pdf::PdfParser;
use crate::input::record::DocumentRecord;
use log::{debug, warn};
use std::path::Path;
use std::sync::Arc;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<DocumentRecord>;
}

fn source_of(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn read_utf8(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| DocLoaderError::io(path, e))?;
    String::from_utf8(bytes).map_err(|e| DocLoaderError::Decode {
        path: path.to_path_buf(),
        source: e,
    })
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<DocumentRecord> {
        let content = read_utf8(path)?;
        Ok(DocumentRecord::new(content, source_of(path)))
    }
}

pub struct MarkdownExtractor {
    renderer: Option<Arc<dyn MarkdownRenderer>>,
}

impl MarkdownExtractor {
    pub fn new(renderer: Option<Arc<dyn MarkdownRenderer>>) -> Self {
        Self { renderer }
    }
}

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, path: &Path) -> Result<DocumentRecord> {
        let renderer = self.renderer.as_ref().ok_or(DocLoaderError::DependencyMissing {
            capability: Capability::MarkdownRenderer,
        })?;

        let markdown_content = read_utf8(path)?;
        let html_output = renderer.render(&markdown_content);
        Ok(DocumentRecord::new(html_output, source_of(path)))
    }
}

pub struct PdfExtractor {
    parser: Option<Arc<dyn PdfParser>>,
    page_separator: String,
}

impl PdfExtractor {
    pub fn new(parser: Option<Arc<dyn PdfParser>>) -> Self {
        Self {
            parser,
            page_separator: String::new(),
        }
    }

    /// Text placed between consecutive non-empty pages.
    pub fn with_page_separator(mut self, separator: impl Into<String>) -> Self {
        self.page_separator = separator.into();
        self
    }
}

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<DocumentRecord> {
        let parser = self.parser.as_ref().ok_or(DocLoaderError::DependencyMissing {
            capability: Capability::PdfParser,
        })?;

        let bytes = std::fs::read(path).map_err(|e| DocLoaderError::io(path, e))?;
        let document = parser.open(path, &bytes)?;

        let page_count = document.page_count();
        let mut text = String::new();
        for index in 0..page_count {
            // A bad page only loses its own text
            let page_text = match document.page_text(index) {
                Ok(Some(page_text)) => page_text,
                Ok(None) => {
                    debug!("Page {} of {} has no text", index + 1, path.display());
                    continue;
                }
                Err(e) => {
                    warn!("Skipping page {} of {}: {}", index + 1, path.display(), e);
                    continue;
                }
            };
            if page_text.is_empty() {
                continue;
            }
            if !text.is_empty() {
                text.push_str(&self.page_separator);
            }
            text.push_str(&page_text);
        }

        debug!(
            "Extracted {} characters from {} pages of {}",
            text.len(),
            page_count,
            path.display()
        );
        Ok(DocumentRecord::new(text, source_of(path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::pdf::PdfDocument;
    use std::fs;
    use tempfile::tempdir;

    struct UpperRenderer;

    impl MarkdownRenderer for UpperRenderer {
        fn render(&self, markdown: &str) -> String {
            format!("<p>{}</p>", markdown.to_uppercase())
        }
    }

    /// Pages are `Ok(Some)`, `Ok(None)` or an extraction error (`Err(())`).
    struct FakePdf {
        pages: Vec<std::result::Result<Option<&'static str>, ()>>,
    }

    impl PdfDocument for FakePdf {
        fn page_count(&self) -> usize {
            self.pages.len()
        }

        fn page_text(&self, index: usize) -> Result<Option<String>> {
            match &self.pages[index] {
                Ok(text) => Ok(text.map(str::to_string)),
                Err(()) => Err(DocLoaderError::CorruptFile {
                    path: "fake.pdf".into(),
                    reason: "bad content stream".to_string(),
                }),
            }
        }
    }

    struct FakeParser {
        pages: Vec<std::result::Result<Option<&'static str>, ()>>,
    }

    impl PdfParser for FakeParser {
        fn open(&self, _path: &Path, _bytes: &[u8]) -> Result<Box<dyn PdfDocument>> {
            Ok(Box::new(FakePdf {
                pages: self.pages.clone(),
            }))
        }
    }

    fn pdf_extractor(pages: Vec<std::result::Result<Option<&'static str>, ()>>) -> PdfExtractor {
        PdfExtractor::new(Some(Arc::new(FakeParser { pages })))
    }

    #[test]
    fn test_plain_text_is_returned_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "hello\nworld").unwrap();

        let record = PlainTextExtractor.extract(&path).unwrap();
        assert_eq!(record.text(), "hello\nworld");
        assert_eq!(record.source(), path.to_string_lossy());
    }

    #[test]
    fn test_invalid_utf8_is_a_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, [0x63, 0x61, 0x66, 0xe9]).unwrap();

        let result = PlainTextExtractor.extract(&path);
        assert!(matches!(result, Err(DocLoaderError::Decode { .. })));
    }

    #[test]
    fn test_markdown_uses_injected_renderer() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.md");
        fs::write(&path, "shout").unwrap();

        let extractor = MarkdownExtractor::new(Some(Arc::new(UpperRenderer)));
        let record = extractor.extract(&path).unwrap();
        assert_eq!(record.text(), "<p>SHOUT</p>");
    }

    #[test]
    fn test_markdown_without_renderer_fails_before_reading() {
        // The file does not exist: a read would surface as Io instead
        let extractor = MarkdownExtractor::new(None);
        let result = extractor.extract(Path::new("missing/never-read.md"));
        assert!(matches!(
            result,
            Err(DocLoaderError::DependencyMissing {
                capability: Capability::MarkdownRenderer
            })
        ));
    }

    #[test]
    fn test_pdf_without_parser_fails_before_reading() {
        let extractor = PdfExtractor::new(None);
        let result = extractor.extract(Path::new("missing/never-read.pdf"));
        assert!(matches!(
            result,
            Err(DocLoaderError::DependencyMissing {
                capability: Capability::PdfParser
            })
        ));
    }

    #[test]
    fn test_empty_pdf_pages_contribute_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        fs::write(&path, b"%PDF-fake").unwrap();

        let record = pdf_extractor(vec![Ok(None), Ok(Some("Page2"))])
            .extract(&path)
            .unwrap();
        assert_eq!(record.text(), "Page2");
        assert_eq!(record.metadata().len(), 1);
    }

    #[test]
    fn test_failing_pdf_page_does_not_abort() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        fs::write(&path, b"%PDF-fake").unwrap();

        let record = pdf_extractor(vec![Ok(Some("one ")), Err(()), Ok(Some("three"))])
            .extract(&path)
            .unwrap();
        assert_eq!(record.text(), "one three");
    }

    #[test]
    fn test_page_separator_only_between_non_empty_pages() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doc.pdf");
        fs::write(&path, b"%PDF-fake").unwrap();

        let record = pdf_extractor(vec![Ok(Some("a")), Ok(None), Ok(Some("")), Ok(Some("b"))])
            .with_page_separator("\n\n")
            .extract(&path)
            .unwrap();
        assert_eq!(record.text(), "a\n\nb");
    }

    #[test]
    fn test_pdf_read_failure_is_io() {
        let result = pdf_extractor(vec![]).extract(Path::new("missing/gone.pdf"));
        assert!(matches!(result, Err(DocLoaderError::Io { .. })));
    }
}
