//! Markdown rendering capability

use crate::config::MarkdownConfig;

/// Turns Markdown source into an HTML string.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> String;
}

/// CommonMark renderer backed by pulldown-cmark.
#[cfg(feature = "markdown")]
#[derive(Debug, Clone)]
pub struct PulldownRenderer {
    options: pulldown_cmark::Options,
}

#[cfg(feature = "markdown")]
impl PulldownRenderer {
    pub fn new() -> Self {
        Self::from_config(&MarkdownConfig::default())
    }

    pub fn from_config(config: &MarkdownConfig) -> Self {
        use pulldown_cmark::Options;

        let mut options = Options::empty();
        options.set(Options::ENABLE_TABLES, config.tables);
        options.set(Options::ENABLE_FOOTNOTES, config.footnotes);
        options.set(Options::ENABLE_STRIKETHROUGH, config.strikethrough);
        options.set(Options::ENABLE_TASKLISTS, config.tasklists);
        options.set(Options::ENABLE_SMART_PUNCTUATION, config.smart_punctuation);
        Self { options }
    }
}

#[cfg(feature = "markdown")]
impl Default for PulldownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "markdown")]
impl MarkdownRenderer for PulldownRenderer {
    fn render(&self, markdown: &str) -> String {
        let parser = pulldown_cmark::Parser::new_ext(markdown, self.options);
        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        pulldown_cmark::html::push_html(&mut html_output, parser);
        html_output
    }
}

/// The renderer compiled into this build, if any.
#[cfg(feature = "markdown")]
pub fn default_renderer(config: &MarkdownConfig) -> Option<std::sync::Arc<dyn MarkdownRenderer>> {
    Some(std::sync::Arc::new(PulldownRenderer::from_config(config)))
}

#[cfg(not(feature = "markdown"))]
pub fn default_renderer(_config: &MarkdownConfig) -> Option<std::sync::Arc<dyn MarkdownRenderer>> {
    None
}
