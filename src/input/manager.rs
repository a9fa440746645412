//! Document loader: resolves a path to the right extractor

use crate::config::Config;
use crate::error::{Capability, DocLoaderError, Result};
use crate::input::file_detector::FileType;
use crate::input::markdown::{self, MarkdownRenderer};
use crate::input::pdf::{self, PdfParser};
use crate::input::record::DocumentRecord;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::debug;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Loads files into `DocumentRecord`s.
///
/// Holds no per-call state, so one loader can be cloned and shared freely.
#[derive(Clone)]
pub struct DocumentLoader {
    markdown_renderer: Option<Arc<dyn MarkdownRenderer>>,
    pdf_parser: Option<Arc<dyn PdfParser>>,
    page_separator: String,
}

impl Default for DocumentLoader {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl std::fmt::Debug for DocumentLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentLoader")
            .field("markdown_renderer", &self.markdown_renderer.is_some())
            .field("pdf_parser", &self.pdf_parser.is_some())
            .field("page_separator", &self.page_separator)
            .finish()
    }
}

impl DocumentLoader {
    /// Loader wired with the collaborators compiled into this build.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            markdown_renderer: markdown::default_renderer(&config.markdown),
            pdf_parser: pdf::default_parser(),
            page_separator: config.pdf.page_separator.clone(),
        }
    }

    pub fn with_markdown_renderer(mut self, renderer: Arc<dyn MarkdownRenderer>) -> Self {
        self.markdown_renderer = Some(renderer);
        self
    }

    pub fn without_markdown_renderer(mut self) -> Self {
        self.markdown_renderer = None;
        self
    }

    pub fn with_pdf_parser(mut self, parser: Arc<dyn PdfParser>) -> Self {
        self.pdf_parser = Some(parser);
        self
    }

    pub fn without_pdf_parser(mut self) -> Self {
        self.pdf_parser = None;
        self
    }

    pub fn missing_capabilities(&self) -> Vec<Capability> {
        let mut missing = Vec::new();
        if self.markdown_renderer.is_none() {
            missing.push(Capability::MarkdownRenderer);
        }
        if self.pdf_parser.is_none() {
            missing.push(Capability::PdfParser);
        }
        missing
    }

    /// Fails on the first missing collaborator, for callers that want to
    /// report a misconfigured build at startup rather than on first use.
    pub fn check_capabilities(&self) -> Result<()> {
        match self.missing_capabilities().first() {
            Some(&capability) => Err(DocLoaderError::DependencyMissing { capability }),
            None => Ok(()),
        }
    }

    pub fn supports(&self, file_type: FileType) -> bool {
        match file_type {
            FileType::PlainText => true,
            FileType::Markdown => self.markdown_renderer.is_some(),
            FileType::Pdf => self.pdf_parser.is_some(),
        }
    }

    /// Load `path` with the extractor its extension selects.
    pub fn resolve(&self, path: impl AsRef<Path>) -> Result<DocumentRecord> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(DocLoaderError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let file_type = FileType::detect(path)?;
        debug!("Loading {} as {}", path.display(), file_type);
        self.load(file_type, path)
    }

    /// Load `path` as `file_type`, skipping extension detection.
    pub fn load(&self, file_type: FileType, path: &Path) -> Result<DocumentRecord> {
        match file_type {
            FileType::PlainText => PlainTextExtractor.extract(path),
            FileType::Markdown => {
                MarkdownExtractor::new(self.markdown_renderer.clone()).extract(path)
            }
            FileType::Pdf => PdfExtractor::new(self.pdf_parser.clone())
                .with_page_separator(self.page_separator.as_str())
                .extract(path),
        }
    }

    /// `resolve` on tokio's blocking pool.
    pub async fn resolve_async(&self, path: impl Into<PathBuf>) -> Result<DocumentRecord> {
        let path = path.into();
        let loader = self.clone();
        let task_path = path.clone();

        tokio::task::spawn_blocking(move || loader.resolve(task_path))
            .await
            .map_err(|e| DocLoaderError::io(path, std::io::Error::other(e)))?
    }
}
