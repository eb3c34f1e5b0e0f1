//! Parser extension point.

use pulldown_cmark::{Options, Parser};

/// Markdown parser configuration shared by every conversion.
///
/// Starts as plain `CommonMark` with no extensions. Plugins may enable
/// additional syntax through [`enable`](Self::enable).
#[derive(Debug, Clone, Copy)]
pub struct MarkdownParser {
    options: Options,
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self {
            options: Options::empty(),
        }
    }
}

impl MarkdownParser {
    /// Create a parser with no extensions enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable parser extensions.
    pub fn enable(&mut self, options: Options) {
        self.options.insert(options);
    }

    /// Disable parser extensions.
    pub fn disable(&mut self, options: Options) {
        self.options.remove(options);
    }

    /// Currently enabled parser extensions.
    #[must_use]
    pub fn options(&self) -> Options {
        self.options
    }

    /// Create a `pulldown-cmark` parser for the given text.
    #[must_use]
    pub fn parse<'a>(&self, markdown: &'a str) -> Parser<'a> {
        Parser::new_ext(markdown, self.options)
    }
}
