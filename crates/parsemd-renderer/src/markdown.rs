//! Markdown converter combining parser and renderer.

use pulldown_cmark::Options;

use crate::{ConvertError, HtmlRenderer, MarkdownParser};

/// Markdown to HTML converter.
///
/// Owns the [`MarkdownParser`] and [`HtmlRenderer`] extension points.
/// Configure both before converting; conversion itself only borrows `self`,
/// so one instance can serve many documents.
#[derive(Debug, Default)]
pub struct Markdown {
    parser: MarkdownParser,
    renderer: HtmlRenderer,
}

impl Markdown {
    /// Create a plain `CommonMark` converter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable GitHub Flavored Markdown extensions.
    ///
    /// Covers tables, strikethrough, task lists and GFM blockquote tags.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        let gfm = Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_GFM;
        if enabled {
            self.parser.enable(gfm);
        } else {
            self.parser.disable(gfm);
        }
        self
    }

    /// Parser extension point.
    #[must_use]
    pub fn parser(&self) -> &MarkdownParser {
        &self.parser
    }

    /// Mutable parser extension point.
    pub fn parser_mut(&mut self) -> &mut MarkdownParser {
        &mut self.parser
    }

    /// Renderer extension point.
    #[must_use]
    pub fn renderer(&self) -> &HtmlRenderer {
        &self.renderer
    }

    /// Mutable renderer extension point.
    pub fn renderer_mut(&mut self) -> &mut HtmlRenderer {
        &mut self.renderer
    }

    /// Render markdown text to HTML.
    #[must_use]
    pub fn render(&self, markdown: &str) -> String {
        let mut html = String::with_capacity(markdown.len() + markdown.len() / 2);
        self.renderer
            .push_html(&mut html, self.parser.parse(markdown));
        html
    }

    /// Convert raw markdown bytes to HTML.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidUtf8`] if `source` is not valid UTF-8.
    pub fn convert(&self, source: &[u8]) -> Result<String, ConvertError> {
        let markdown = std::str::from_utf8(source)?;
        let html = self.render(markdown);
        tracing::debug!(
            input_len = source.len(),
            output_len = html.len(),
            "Converted markdown"
        );
        Ok(html)
    }
}
